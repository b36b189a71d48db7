use compact_str::CompactString;

use crate::scene::{
    Rectangle, Scene, Sierpinski, SierpinskiColors, SierpinskiTetra, SierpinskiThree,
};

/// Demo scenes reachable from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneKind {
    Sierpinski,
    SierpinskiThree,
    SierpinskiColors,
    SierpinskiTetra,
    Rectangle,
}

impl SceneKind {
    pub fn create(self) -> Box<dyn Scene> {
        match self {
            SceneKind::Sierpinski => Box::new(Sierpinski::new()),
            SceneKind::SierpinskiThree => Box::new(SierpinskiThree::new()),
            SceneKind::SierpinskiColors => Box::new(SierpinskiColors::new()),
            SceneKind::SierpinskiTetra => Box::new(SierpinskiTetra::new()),
            SceneKind::Rectangle => Box::new(Rectangle::new()),
        }
    }
}

/// Node in the statically defined route tree: a branch grouping demos, or
/// a leaf naming one scene.
#[derive(Debug)]
pub struct RouteNode {
    pub name: CompactString,
    pub children: Vec<RouteNode>,
    pub scene: Option<SceneKind>,
}

impl RouteNode {
    fn branch(name: &str, children: Vec<RouteNode>) -> Self {
        Self { name: name.into(), children, scene: None }
    }

    fn leaf(name: &str, scene: SceneKind) -> Self {
        Self { name: name.into(), children: Vec::new(), scene: Some(scene) }
    }
}

/// Flat menu row produced from the route tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: CompactString,
    pub path: CompactString,
    pub scene: SceneKind,
}

/// The demo catalog, grouped by chapter.
pub fn route_tree() -> Vec<RouteNode> {
    vec![
        RouteNode::branch(
            "chapter-01",
            vec![
                RouteNode::leaf("sierpinski", SceneKind::Sierpinski),
                RouteNode::leaf("sierpinski-three", SceneKind::SierpinskiThree),
                RouteNode::leaf("sierpinski-colors", SceneKind::SierpinskiColors),
                RouteNode::leaf("sierpinski-tetra", SceneKind::SierpinskiTetra),
            ],
        ),
        RouteNode::branch(
            "chapter-02",
            vec![RouteNode::leaf("rectangle", SceneKind::Rectangle)],
        ),
    ]
}

/// Recursively flattens a route tree into menu rows with `/`-joined paths.
pub fn flatten_menu(nodes: &[RouteNode]) -> Vec<MenuEntry> {
    let mut entries = Vec::new();
    collect(nodes, "", &mut entries);
    entries
}

fn collect(nodes: &[RouteNode], prefix: &str, out: &mut Vec<MenuEntry>) {
    for node in nodes {
        let path = if prefix.is_empty() {
            node.name.to_string()
        } else {
            format!("{prefix}/{}", node.name)
        };

        if let Some(scene) = node.scene {
            out.push(MenuEntry {
                label: node.name.clone(),
                path: path.as_str().into(),
                scene,
            });
        }

        collect(&node.children, &path, out);
    }
}

/// Resolves a menu path back to its scene.
pub fn find_scene(path: &str) -> Option<SceneKind> {
    flatten_menu(&route_tree())
        .into_iter()
        .find(|entry| entry.path == path)
        .map(|entry| entry.scene)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_covers_all_leaves() {
        let entries = flatten_menu(&route_tree());

        assert_eq!(entries.len(), 5);
        assert!(entries.iter().all(|e| !e.path.is_empty()));
    }

    #[test]
    fn test_paths_are_slash_joined() {
        let entries = flatten_menu(&route_tree());

        assert_eq!(entries[0].path, "chapter-01/sierpinski");
        assert_eq!(entries[0].label, "sierpinski");
        assert_eq!(entries[4].path, "chapter-02/rectangle");
    }

    #[test]
    fn test_deeper_nesting_flattens_depth_first() {
        let tree = vec![RouteNode::branch(
            "outer",
            vec![
                RouteNode::branch(
                    "inner",
                    vec![RouteNode::leaf("leaf", SceneKind::Rectangle)],
                ),
                RouteNode::leaf("sibling", SceneKind::Sierpinski),
            ],
        )];

        let entries = flatten_menu(&tree);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].path, "outer/inner/leaf");
        assert_eq!(entries[1].path, "outer/sibling");
    }

    #[test]
    fn test_find_scene() {
        assert_eq!(
            find_scene("chapter-01/sierpinski-tetra"),
            Some(SceneKind::SierpinskiTetra)
        );
        assert_eq!(find_scene("chapter-02/rectangle"), Some(SceneKind::Rectangle));
        assert_eq!(find_scene("nope"), None);
        assert_eq!(find_scene("chapter-01"), None);
    }
}
