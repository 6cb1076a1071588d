// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 iconview contributors

//! File-name to icon-identifier classification table.
//!
//! Identifiers follow the VSCode-icons asset naming scheme
//! (`file_type_rust.svg`, `default_file.svg`, ...) and are opaque to the
//! rest of the app; only the resolver in [`crate::utils::file_icons`]
//! turns them into URLs. The table is a plain read-only value so tests
//! can substitute their own instead of patching a global.

/// Read-only mapping from file names to icon identifiers.
///
/// Matching contract:
/// - lookups are case-insensitive (input is lowercased first);
/// - an exact full-file-name match wins over any suffix match;
/// - dotted suffixes are tried longest-first, so `archive.tar.gz`
///   resolves via `.tar.gz` before `.gz` would be considered;
/// - empty input or no matching entry yields `None`; no input panics.
pub struct IconMap {
    /// Exact full-file-name entries, stored lowercase.
    pub names: &'static [(&'static str, &'static str)],
    /// Dotted-suffix entries, stored lowercase with the leading dot.
    pub suffixes: &'static [(&'static str, &'static str)],
    /// Identifier used when no file entry matches.
    pub default_file: &'static str,
    /// Identifier for a closed folder.
    pub default_folder: &'static str,
    /// Identifier for an opened folder.
    pub default_folder_opened: &'static str,
}

impl IconMap {
    /// Look up the icon identifier for a file name, if one is mapped.
    pub fn identifier_for(&self, file_name: &str) -> Option<&'static str> {
        if file_name.is_empty() {
            return None;
        }
        let name = file_name.to_ascii_lowercase();

        if let Some(&(_, id)) = self.names.iter().find(|(n, _)| *n == name) {
            return Some(id);
        }

        // Walk the dots left to right; each step drops one leading
        // component, so longer suffixes are tried before shorter ones.
        let mut rest = name.as_str();
        while let Some(pos) = rest.find('.') {
            let suffix = &rest[pos..];
            if let Some(&(_, id)) = self.suffixes.iter().find(|(s, _)| *s == suffix) {
                return Some(id);
            }
            rest = &rest[pos + 1..];
        }

        None
    }
}

/// The built-in VSCode-icons-style table.
pub fn default_map() -> &'static IconMap {
    &DEFAULT_MAP
}

static DEFAULT_MAP: IconMap = IconMap {
    names: &[
        ("cargo.toml", "file_type_cargo.svg"),
        ("cargo.lock", "file_type_cargo.svg"),
        ("dockerfile", "file_type_docker.svg"),
        ("docker-compose.yml", "file_type_docker.svg"),
        ("docker-compose.yaml", "file_type_docker.svg"),
        (".gitignore", "file_type_git.svg"),
        (".gitattributes", "file_type_git.svg"),
        (".gitmodules", "file_type_git.svg"),
        ("license", "file_type_license.svg"),
        ("license.md", "file_type_license.svg"),
        ("license.txt", "file_type_license.svg"),
        ("package.json", "file_type_npm.svg"),
        ("package-lock.json", "file_type_npm.svg"),
        ("tsconfig.json", "file_type_tsconfig.svg"),
        ("vite.config.js", "file_type_vite.svg"),
        ("vite.config.ts", "file_type_vite.svg"),
        ("makefile", "file_type_makefile.svg"),
    ],
    suffixes: &[
        // Lookup order is driven by the input's dots, not by table
        // order, so multi-part entries can sit anywhere.
        (".d.ts", "file_type_typescriptdef.svg"),
        (".tar.gz", "file_type_zip.svg"),
        (".tar.bz2", "file_type_zip.svg"),
        (".tar.xz", "file_type_zip.svg"),
        (".tar.zst", "file_type_zip.svg"),
        (".rs", "file_type_rust.svg"),
        (".py", "file_type_python.svg"),
        (".pyw", "file_type_python.svg"),
        (".js", "file_type_js.svg"),
        (".mjs", "file_type_js.svg"),
        (".cjs", "file_type_js.svg"),
        (".ts", "file_type_typescript.svg"),
        (".mts", "file_type_typescript.svg"),
        (".cts", "file_type_typescript.svg"),
        (".jsx", "file_type_reactjs.svg"),
        (".tsx", "file_type_reactts.svg"),
        (".vue", "file_type_vue.svg"),
        (".svelte", "file_type_svelte.svg"),
        (".json", "file_type_json.svg"),
        (".md", "file_type_markdown.svg"),
        (".markdown", "file_type_markdown.svg"),
        (".html", "file_type_html.svg"),
        (".htm", "file_type_html.svg"),
        (".css", "file_type_css.svg"),
        (".scss", "file_type_scss.svg"),
        (".sass", "file_type_scss.svg"),
        (".less", "file_type_less.svg"),
        (".c", "file_type_c.svg"),
        (".h", "file_type_c.svg"),
        (".cpp", "file_type_cpp.svg"),
        (".cc", "file_type_cpp.svg"),
        (".cxx", "file_type_cpp.svg"),
        (".hpp", "file_type_cpp.svg"),
        (".cs", "file_type_csharp.svg"),
        (".go", "file_type_go.svg"),
        (".java", "file_type_java.svg"),
        (".kt", "file_type_kotlin.svg"),
        (".kts", "file_type_kotlin.svg"),
        (".swift", "file_type_swift.svg"),
        (".rb", "file_type_ruby.svg"),
        (".php", "file_type_php.svg"),
        (".lua", "file_type_lua.svg"),
        (".zig", "file_type_zig.svg"),
        (".hs", "file_type_haskell.svg"),
        (".ex", "file_type_elixir.svg"),
        (".exs", "file_type_elixir.svg"),
        (".sh", "file_type_shell.svg"),
        (".bash", "file_type_shell.svg"),
        (".zsh", "file_type_shell.svg"),
        (".yaml", "file_type_yaml.svg"),
        (".yml", "file_type_yaml.svg"),
        (".toml", "file_type_toml.svg"),
        (".xml", "file_type_xml.svg"),
        (".sql", "file_type_sql.svg"),
        (".ini", "file_type_ini.svg"),
        (".cfg", "file_type_ini.svg"),
        (".conf", "file_type_ini.svg"),
        (".txt", "file_type_text.svg"),
        (".log", "file_type_log.svg"),
        (".pdf", "file_type_pdf2.svg"),
        (".png", "file_type_image.svg"),
        (".jpg", "file_type_image.svg"),
        (".jpeg", "file_type_image.svg"),
        (".gif", "file_type_image.svg"),
        (".bmp", "file_type_image.svg"),
        (".webp", "file_type_image.svg"),
        (".svg", "file_type_svg.svg"),
        (".mp3", "file_type_audio.svg"),
        (".wav", "file_type_audio.svg"),
        (".flac", "file_type_audio.svg"),
        (".ogg", "file_type_audio.svg"),
        (".mp4", "file_type_video.svg"),
        (".mkv", "file_type_video.svg"),
        (".webm", "file_type_video.svg"),
        (".mov", "file_type_video.svg"),
        (".zip", "file_type_zip.svg"),
        (".tar", "file_type_zip.svg"),
        (".gz", "file_type_zip.svg"),
        (".bz2", "file_type_zip.svg"),
        (".xz", "file_type_zip.svg"),
        (".zst", "file_type_zip.svg"),
        (".7z", "file_type_zip.svg"),
        (".rar", "file_type_zip.svg"),
    ],
    default_file: "default_file.svg",
    default_folder: "default_folder.svg",
    default_folder_opened: "default_folder_opened.svg",
};

#[cfg(test)]
mod tests {
    use super::default_map;

    // Extension matching ignores case in the input.
    #[test]
    fn identifier_for_is_case_insensitive() {
        let map = default_map();
        assert_eq!(map.identifier_for("MAIN.RS"), Some("file_type_rust.svg"));
        assert_eq!(map.identifier_for("Cargo.TOML"), Some("file_type_cargo.svg"));
    }

    // Full-file-name entries win over what the extension alone would say.
    #[test]
    fn full_name_match_beats_suffix_match() {
        let map = default_map();
        // `.json` alone would give the generic json icon.
        assert_eq!(map.identifier_for("package.json"), Some("file_type_npm.svg"));
        assert_eq!(map.identifier_for("data.json"), Some("file_type_json.svg"));
    }

    // Longer dotted suffixes are matched before shorter ones.
    #[test]
    fn multi_part_suffix_beats_plain_extension() {
        let map = default_map();
        assert_eq!(
            map.identifier_for("api.d.ts"),
            Some("file_type_typescriptdef.svg")
        );
        assert_eq!(
            map.identifier_for("api.ts"),
            Some("file_type_typescript.svg")
        );
        assert_eq!(map.identifier_for("dist.tar.gz"), Some("file_type_zip.svg"));
    }

    // Names without any mapped entry yield no identifier.
    #[test]
    fn unmapped_names_yield_none() {
        let map = default_map();
        assert_eq!(map.identifier_for("unknownfile.xyz123"), None);
        assert_eq!(map.identifier_for("no_extension"), None);
        assert_eq!(map.identifier_for(""), None);
    }

    // Dotfiles resolve through the full-name table.
    #[test]
    fn dotfiles_resolve_via_full_name_entries() {
        let map = default_map();
        assert_eq!(map.identifier_for(".gitignore"), Some("file_type_git.svg"));
    }
}
