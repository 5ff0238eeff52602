use crate::error::{Error, Result};
use crate::node::{Container, Element, Node};

/// Walk down from `root` following a list of element names.
///
/// At each level the *first* child element with the next name is taken; there
/// is no backtracking, so later siblings with the same name are never visited.
/// Text and comment nodes are ignored.
pub fn find_by_path<'a, C>(root: &'a C, path: &[&str]) -> Result<&'a Element>
where
    C: Container + ?Sized,
{
    let (first, rest) = path.split_first().ok_or_else(|| Error::StructureNotFound {
        path: String::new(),
    })?;
    let mut current = find_child(root.children(), first).ok_or_else(|| not_found(path, 0))?;
    for (depth, name) in rest.iter().enumerate() {
        current = find_child(&current.children, name).ok_or_else(|| not_found(path, depth + 1))?;
    }
    Ok(current)
}

fn find_child<'a>(children: &'a [Node], name: &str) -> Option<&'a Element> {
    children
        .iter()
        .filter_map(|n| n.as_element())
        .find(|e| e.name == name)
}

fn not_found(path: &[&str], depth: usize) -> Error {
    Error::StructureNotFound {
        path: path[..=depth].join("/"),
    }
}
