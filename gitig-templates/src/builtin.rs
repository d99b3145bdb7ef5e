//! Templates compiled into the binary.
//!
//! Lookups are case-insensitive; `Python`, `python` and `PYTHON` all name the
//! same entry.

use gitig_core::Result;

use crate::source::{Origin, Template, TemplateSource};

/// A built-in template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Builtin {
    pub name: &'static str,
    pub content: &'static str,
}

const BUILTINS: &[Builtin] = &[
    Builtin {
        name: "python",
        content: PYTHON,
    },
    Builtin {
        name: "node",
        content: NODE,
    },
    Builtin {
        name: "rust",
        content: RUST,
    },
    Builtin {
        name: "c",
        content: C,
    },
    Builtin {
        name: "cpp",
        content: CPP,
    },
    Builtin {
        name: "java",
        content: JAVA,
    },
    Builtin {
        name: "go",
        content: GO,
    },
    Builtin {
        name: "swift",
        content: SWIFT,
    },
    Builtin {
        name: "ruby",
        content: RUBY,
    },
    Builtin {
        name: "php",
        content: PHP,
    },
    Builtin {
        name: "typescript",
        content: TYPESCRIPT,
    },
    Builtin {
        name: "vscode",
        content: VSCODE,
    },
    Builtin {
        name: "vim",
        content: VIM,
    },
    Builtin {
        name: "intellij",
        content: INTELLIJ,
    },
    Builtin {
        name: "macos",
        content: MACOS,
    },
    Builtin {
        name: "linux",
        content: LINUX,
    },
    Builtin {
        name: "windows",
        content: WINDOWS,
    },
];

/// Look up a built-in template by name, ignoring case.
pub fn get(name: &str) -> Option<&'static Builtin> {
    BUILTINS.iter().find(|b| b.name.eq_ignore_ascii_case(name))
}

/// Names of all built-in templates, in catalog order.
pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(|b| b.name)
}

/// [`TemplateSource`] over the compiled-in catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl TemplateSource for BuiltinCatalog {
    fn resolve(&self, name: &str) -> Result<Template> {
        let builtin = get(name).ok_or_else(|| gitig_core::Error::invalid_template(name))?;
        Ok(Template::new(name, builtin.content, Origin::Builtin))
    }
}

const PYTHON: &str = r#"# Byte-compiled / optimized / DLL files
__pycache__/
*.py[cod]
*$py.class

# C extensions
*.so

# Distribution / packaging
.Python
build/
develop-eggs/
dist/
downloads/
eggs/
.eggs/
lib/
lib64/
parts/
sdist/
var/
wheels/
*.egg-info/
.installed.cfg
*.egg

# Virtual environments
venv/
env/
ENV/
.venv

# IDEs
.idea/
.vscode/
*.swp
*.swo

# Environment
.env
.env.local
"#;

const NODE: &str = r#"# Dependencies
node_modules/
npm-debug.log*
yarn-debug.log*
yarn-error.log*

# Build outputs
dist/
build/
.next/
.nuxt/
out/

# Cache
.npm
.eslintcache
.node_repl_history

# Environment
.env
.env.local
.env.*.local

# Logs
logs
*.log

# OS
.DS_Store
Thumbs.db
"#;

const RUST: &str = r#"# Build output
target/
Cargo.lock

# Backup files
**/*.rs.bk
*.pdb
"#;

const C: &str = r#"# Object files
*.o
*.ko
*.obj
*.elf

# Libraries
*.a
*.la
*.lo
*.so
*.so.*
*.dylib

# Executables
*.exe
*.out
*.app

# Debug files
*.dSYM/
*.su
"#;

const CPP: &str = r#"# Compiled Object files
*.slo
*.lo
*.o
*.obj

# Compiled Dynamic libraries
*.so
*.dylib
*.dll

# Compiled Static libraries
*.lai
*.la
*.a
*.lib

# Executables
*.exe
*.out
*.app
"#;

const JAVA: &str = r#"# Compiled class files
*.class

# Package Files
*.jar
*.war
*.nar
*.ear
*.zip
*.tar.gz
*.rar

# Build tools
target/
.gradle/
build/

# IDE
.idea/
*.iml
.classpath
.project
.settings/
"#;

const GO: &str = r#"# Binaries
*.exe
*.exe~
*.dll
*.so
*.dylib

# Test binary
*.test

# Output
*.out

# Vendor
vendor/
"#;

const SWIFT: &str = r#"# Xcode
build/
*.pbxuser
!default.pbxuser
*.mode1v3
!default.mode1v3
*.mode2v3
!default.mode2v3
*.perspectivev3
!default.perspectivev3
xcuserdata/
*.xccheckout
*.moved-aside
DerivedData
*.hmap
*.ipa
*.xcuserstate

# Swift Package Manager
.build/
Packages/
Package.pins
Package.resolved
"#;

const RUBY: &str = r#"*.gem
*.rbc
/.config
/coverage/
/InstalledFiles
/pkg/
/spec/reports/
/spec/examples.txt
/test/tmp/
/test/version_tmp/
/tmp/

# Bundler
.bundle
vendor/bundle
"#;

const PHP: &str = r#"# Composer
vendor/
composer.lock

# Laravel
.env
/storage/*.key
/storage/logs/*

# Cache
*.cache
"#;

const TYPESCRIPT: &str = r#"# Build outputs
dist/
build/
*.tsbuildinfo

# Dependencies
node_modules/
"#;

const VSCODE: &str = r#".vscode/
*.code-workspace
.history/
"#;

const VIM: &str = r#"# Swap files
[._]*.s[a-v][a-z]
[._]*.sw[a-p]
[._]s[a-rt-v][a-z]
[._]ss[a-gi-z]
[._]sw[a-p]

# Session
Session.vim
Sessionx.vim

# Temporary
.netrwhist
*~
tags
[._]*.un~
"#;

const INTELLIJ: &str = r#"# IntelliJ IDEA
.idea/
*.iml
*.iws
out/

# CMake
cmake-build-*/
"#;

const MACOS: &str = r#"# General
.DS_Store
.AppleDouble
.LSOverride

# Thumbnails
._*

# Files that might appear in the root
.DocumentRevisions-V100
.fseventsd
.Spotlight-V100
.TemporaryItems
.Trashes
.VolumeIcon.icns
.com.apple.timemachine.donotpresent
"#;

const LINUX: &str = r#"*~

# temporary files
.directory
.Trash-*

# .nfs files
.nfs*
"#;

const WINDOWS: &str = r#"# Windows thumbnail cache
Thumbs.db
Thumbs.db:encryptable
ehthumbs.db
ehthumbs_vista.db

# Folder config file
[Dd]esktop.ini

# Recycle Bin
$RECYCLE.BIN/

# Windows shortcuts
*.lnk
"#;
