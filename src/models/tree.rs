// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 iconview contributors

//! File tree model the UI binds icons to.
//!
//! Nodes carry no filesystem handles; they are plain names plus an
//! open/closed flag for folders, which is all the icon resolver needs.

/// A single entry in the displayed tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileNode {
    /// Display name, also the input to icon resolution.
    pub name: String,
    pub kind: NodeKind,
}

/// File or folder, with per-folder open state and children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Folder {
        open: bool,
        children: Vec<FileNode>,
    },
}

impl FileNode {
    /// Build a file node.
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File,
        }
    }

    /// Build a folder node; folders start closed.
    pub fn folder(name: impl Into<String>, children: Vec<FileNode>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Folder {
                open: false,
                children,
            },
        }
    }
}

/// Flip the open flag of the folder addressed by a child-index path.
///
/// Returns `true` when a folder was toggled. Paths that run off the end
/// of the tree or land on a file node are ignored.
pub fn toggle_at(nodes: &mut [FileNode], path: &[usize]) -> bool {
    let Some((&index, rest)) = path.split_first() else {
        return false;
    };
    let Some(node) = nodes.get_mut(index) else {
        return false;
    };
    match &mut node.kind {
        NodeKind::Folder { open, children } => {
            if rest.is_empty() {
                *open = !*open;
                true
            } else {
                toggle_at(children, rest)
            }
        }
        NodeKind::File => false,
    }
}

/// Demo content the app mounts with.
pub fn sample_tree() -> Vec<FileNode> {
    vec![
        FileNode::folder(
            "src",
            vec![
                FileNode::file("main.rs"),
                FileNode::file("lib.rs"),
                FileNode::folder(
                    "utils",
                    vec![
                        FileNode::file("file_icons.rs"),
                        FileNode::file("icon_map.rs"),
                    ],
                ),
            ],
        ),
        FileNode::folder(
            "web",
            vec![
                FileNode::file("index.html"),
                FileNode::file("style.css"),
                FileNode::file("app.vue"),
                FileNode::file("main.js"),
                FileNode::file("api.d.ts"),
                FileNode::file("package.json"),
                FileNode::file("vite.config.js"),
            ],
        ),
        FileNode::folder(
            "assets",
            vec![
                FileNode::file("logo.svg"),
                FileNode::file("screenshot.png"),
                FileNode::file("jingle.mp3"),
            ],
        ),
        FileNode::folder(
            "scripts",
            vec![FileNode::file("release.sh"), FileNode::file("stats.py")],
        ),
        FileNode::file("Cargo.toml"),
        FileNode::file("README.md"),
        FileNode::file("LICENSE"),
        FileNode::file(".gitignore"),
        FileNode::file("backup.tar.gz"),
        FileNode::file("mystery.xyz123"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    // Toggling a top-level folder flips exactly its own flag.
    #[test]
    fn toggle_at_flips_addressed_folder() {
        let mut tree = sample_tree();
        assert!(toggle_at(&mut tree, &[0]));
        match &tree[0].kind {
            NodeKind::Folder { open, .. } => assert!(*open),
            NodeKind::File => panic!("expected folder"),
        }
        // Siblings stay closed.
        match &tree[1].kind {
            NodeKind::Folder { open, .. } => assert!(!*open),
            NodeKind::File => panic!("expected folder"),
        }
    }

    // Nested folders are addressed by index path.
    #[test]
    fn toggle_at_reaches_nested_folders() {
        let mut tree = sample_tree();
        assert!(toggle_at(&mut tree, &[0, 2]));
        let NodeKind::Folder { children, .. } = &tree[0].kind else {
            panic!("expected folder");
        };
        match &children[2].kind {
            NodeKind::Folder { open, .. } => assert!(*open),
            NodeKind::File => panic!("expected folder"),
        }
    }

    // Toggling twice restores the original state.
    #[test]
    fn toggle_at_round_trips() {
        let mut tree = sample_tree();
        let before = tree.clone();
        assert!(toggle_at(&mut tree, &[1]));
        assert!(toggle_at(&mut tree, &[1]));
        assert_eq!(tree, before);
    }

    // Misses are reported without panicking.
    #[test]
    fn toggle_at_ignores_bad_paths() {
        let mut tree = sample_tree();
        assert!(!toggle_at(&mut tree, &[]));
        assert!(!toggle_at(&mut tree, &[99]));
        // `Cargo.toml` is a file, not a folder.
        assert!(!toggle_at(&mut tree, &[4]));
        // Path descends past a leaf.
        assert!(!toggle_at(&mut tree, &[0, 0, 0]));
    }
}
