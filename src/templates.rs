//! The built-in boilerplate shipped with pl2dist.
//! Each template is plain text carrying `%%SCAFFOLD_*%%` placeholders; the
//! processor substitutes and writes whatever the override pass did not
//! already produce.

use indexmap::IndexMap;

const GITIGNORE: &str = "\
*.bak
Makefile
Makefile.old
blib/
pm_to_blib
%%SCAFFOLD_SCRIPT%%-*
";

const RELEASERC: &str = "cpan_user %%SCAFFOLD_CPAN_USER%%\n";

const CHANGES: &str = "\
Revision history for %%SCAFFOLD_SCRIPT%%

%%SCAFFOLD_VERSION%%
    - first release
";

const MANIFEST_SKIP: &str = "\
.git/**
.gitignore
.releaserc
*.bak
*.old
blib/**
pm_to_blib
Makefile
%%SCAFFOLD_SCRIPT%%-*
";

const MAKEFILE_PL: &str = "\
use ExtUtils::MakeMaker;

WriteMakefile(
    'NAME'             => '%%SCAFFOLD_SCRIPT%%',
    'VERSION'          => '%%SCAFFOLD_VERSION%%',
    'EXE_FILES'        => [ '%%SCAFFOLD_SCRIPT%%' ],
    'MIN_PERL_VERSION' => %%SCAFFOLD_MINIMUM_PERL%%,
    'PREREQ_PM'        => {
%%SCAFFOLD_PREREQ_PM%%
        },
    'clean'            => { FILES => '%%SCAFFOLD_SCRIPT%%-*' },
    );
";

const COMPILE_T: &str = "\
use Test::More tests => 1;

my $script = '%%SCAFFOLD_SCRIPT%%';

my $output = `$^X -c $script 2>&1`;
like( $output, qr/syntax OK$/m, \"$script compiles\" );
";

const POD_T: &str = "\
use Test::More;

eval \"use Test::Pod 1.00\";
plan skip_all => \"Test::Pod 1.00 required for testing POD\" if $@;

all_pod_files_ok();
";

const TEST_MANIFEST: &str = "\
compile.t
pod.t
";

/// Stub written in place of the script when the input path does not exist
/// yet.
pub const SCRIPT_STUB: &str = "\
#!/usr/bin/perl
use strict;
use warnings;

=encoding utf8

=head1 NAME

%%SCAFFOLD_SCRIPT%% - describe this script here

=head1 SYNOPSIS

    %%SCAFFOLD_SCRIPT%%

=head1 DESCRIPTION

=head1 AUTHOR

=head1 COPYRIGHT

=cut
";

/// The fixed built-in template set, keyed by relative path.
///
/// Keys are inserted in lexical order and the map preserves it, so the
/// built-in pass materializes files in the same order on every run.
/// Returns a fresh map per call; there is no shared template state.
pub fn builtin_templates() -> IndexMap<&'static str, &'static str> {
    IndexMap::from([
        (".gitignore", GITIGNORE),
        (".releaserc", RELEASERC),
        ("Changes", CHANGES),
        ("MANIFEST.SKIP", MANIFEST_SKIP),
        ("Makefile.PL", MAKEFILE_PL),
        ("t/compile.t", COMPILE_T),
        ("t/pod.t", POD_T),
        ("t/test_manifest", TEST_MANIFEST),
    ])
}
