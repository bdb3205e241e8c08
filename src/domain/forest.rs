//! Owned category trees produced by the assembly strategies.
//!
//! Hierarchies may be arbitrarily deep, so every pass over a tree (including
//! clone, comparison and drop) walks an explicit stack instead of recursing.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use crate::domain::Record;

/// Tree node owning its children. There is no back-pointer to the parent.
#[derive(Debug)]
pub struct Node {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Distance from the root, 0 for roots. Assigned by [`Forest::from_roots`].
    pub level: usize,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(record: Record, children: Vec<Node>) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            level: 0,
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including self.
    pub fn subtree_size(&self) -> usize {
        let mut pending = vec![self];
        let mut size = 0;
        while let Some(node) = pending.pop() {
            size += 1;
            pending.extend(&node.children);
        }
        size
    }

    /// Number of levels in this subtree, 1 for a leaf.
    pub fn height(&self) -> usize {
        let mut pending = vec![(self, 1)];
        let mut height = 0;
        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            pending.extend(node.children.iter().map(|c| (c, depth + 1)));
        }
        height
    }
}

/// Deep copy of a sibling list, children built before their parents.
fn clone_nodes(nodes: &[Node]) -> Vec<Node> {
    enum Step<'a> {
        Enter(&'a Node),
        Exit(&'a Node, usize),
    }

    let mut steps: Vec<Step<'_>> = nodes.iter().rev().map(Step::Enter).collect();
    let mut built: Vec<Node> = Vec::with_capacity(nodes.len());
    while let Some(step) = steps.pop() {
        match step {
            Step::Enter(node) => {
                steps.push(Step::Exit(node, built.len()));
                steps.extend(node.children.iter().rev().map(Step::Enter));
            }
            Step::Exit(node, mark) => {
                let children = built.split_off(mark);
                built.push(Node {
                    id: node.id,
                    name: node.name.clone(),
                    description: node.description.clone(),
                    level: node.level,
                    children,
                });
            }
        }
    }
    built
}

impl Clone for Node {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            level: self.level,
            children: clone_nodes(&self.children),
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut pairs = vec![(self, other)];
        while let Some((a, b)) = pairs.pop() {
            if a.id != b.id
                || a.level != b.level
                || a.name != b.name
                || a.description != b.description
                || a.children.len() != b.children.len()
            {
                return false;
            }
            pairs.extend(a.children.iter().zip(&b.children));
        }
        true
    }
}

impl Eq for Node {}

impl Drop for Node {
    fn drop(&mut self) {
        // Detach descendants first so each node drops with no children left
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}

/// Stable sort of a node list, then of every list below it.
fn sort_nodes_by<F>(nodes: &mut [Node], compare: F)
where
    F: Fn(&Node, &Node) -> Ordering,
{
    let mut pending: Vec<&mut [Node]> = vec![nodes];
    while let Some(list) = pending.pop() {
        list.sort_by(&compare);
        pending.extend(list.iter_mut().map(|n| n.children.as_mut_slice()));
    }
}

/// Ordered list of root nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forest {
    roots: Vec<Node>,
}

impl Forest {
    /// Builds a forest and (re)computes every node's level from the structure alone.
    pub fn from_roots(mut roots: Vec<Node>) -> Self {
        let mut pending: Vec<(&mut Node, usize)> = roots.iter_mut().map(|r| (r, 0)).collect();
        while let Some((node, level)) = pending.pop() {
            node.level = level;
            pending.extend(node.children.iter_mut().map(|c| (c, level + 1)));
        }
        Self { roots }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Number of levels in the deepest tree, 0 for an empty forest.
    pub fn max_depth(&self) -> usize {
        self.roots.iter().map(Node::height).max().unwrap_or(0)
    }

    /// Pre-order traversal, roots left to right.
    pub fn iter(&self) -> ForestIter<'_> {
        ForestIter::new(self)
    }

    /// Nodes grouped by level: index 0 holds the roots, index 1 their children, ...
    pub fn levels(&self) -> Vec<Vec<&Node>> {
        let mut levels = Vec::new();
        let mut current: Vec<&Node> = self.roots.iter().collect();
        while !current.is_empty() {
            let next = current.iter().flat_map(|n| n.children.iter()).collect();
            levels.push(current);
            current = next;
        }
        levels
    }

    /// Parent/child edges as `(parent_id, child_id)`; roots appear with `None`.
    pub fn relationships(&self) -> BTreeSet<(Option<i64>, i64)> {
        let mut edges = BTreeSet::new();
        let mut pending: Vec<(Option<i64>, &Node)> =
            self.roots.iter().map(|r| (None, r)).collect();
        while let Some((parent, node)) = pending.pop() {
            edges.insert((parent, node.id));
            pending.extend(node.children.iter().map(|c| (Some(node.id), c)));
        }
        edges
    }

    /// Copy with roots and every child list ordered by id.
    pub fn canonical(&self) -> Self {
        let mut roots = clone_nodes(&self.roots);
        sort_nodes_by(&mut roots, |a, b| a.id.cmp(&b.id));
        Self { roots }
    }

    /// Orders roots and every child list by name, ordinal comparison.
    pub(crate) fn sort_by_name(&mut self) {
        sort_nodes_by(&mut self.roots, |a, b| a.name.cmp(&b.name));
    }
}

impl<'a> IntoIterator for &'a Forest {
    type Item = &'a Node;
    type IntoIter = ForestIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct ForestIter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> ForestIter<'a> {
    fn new(forest: &'a Forest) -> Self {
        // Reverse so the first root is popped first
        let stack = forest.roots.iter().rev().collect();
        Self { stack }
    }
}

impl<'a> Iterator for ForestIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        for child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}
