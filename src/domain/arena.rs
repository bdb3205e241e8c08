//! Index-linked node storage for the indexed assembly.

use generational_arena::{Arena, Index};
use tracing::debug;

use crate::domain::{Forest, Node, Record};

/// Arena slot: the record plus the arena indices of its children.
#[derive(Debug)]
pub struct ArenaNode {
    pub record: Record,
    pub children: Vec<Index>,
}

/// Flat node storage for the indexed assembly.
///
/// All nodes are allocated up front and linked by [`Index`], so linking never
/// needs references into the structure being built. The owned [`Forest`] is
/// produced at the end by moving nodes out of the arena.
#[derive(Debug, Default)]
pub struct NodeArena {
    arena: Arena<ArenaNode>,
    roots: Vec<Index>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            roots: Vec::new(),
        }
    }

    /// Allocates an unlinked node.
    pub fn insert_node(&mut self, record: Record) -> Index {
        self.arena.insert(ArenaNode {
            record,
            children: Vec::new(),
        })
    }

    pub fn push_root(&mut self, idx: Index) {
        self.roots.push(idx);
    }

    /// Appends `child` to `parent`'s child list. Returns false if `parent` is not in the arena.
    pub fn attach(&mut self, parent: Index, child: Index) -> bool {
        match self.arena.get_mut(parent) {
            Some(node) => {
                node.children.push(child);
                true
            }
            None => false,
        }
    }

    pub fn get_node(&self, idx: Index) -> Option<&ArenaNode> {
        self.arena.get(idx)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Moves every node reachable from the roots into an owned forest.
    ///
    /// Nodes not reachable from a root (orphans, their descendants, cycles)
    /// are left behind and dropped with the arena.
    pub fn into_forest(mut self) -> Forest {
        debug!(nodes = self.arena.len(), roots = self.roots.len(), "materializing forest");
        let roots = std::mem::take(&mut self.roots);
        Forest::from_roots(self.detach(&roots))
    }

    /// Removes the subtrees below `roots` from the arena, children built before parents.
    fn detach(&mut self, roots: &[Index]) -> Vec<Node> {
        enum Step {
            Enter(Index),
            Exit(Record, usize),
        }

        let mut steps: Vec<Step> = roots.iter().rev().map(|&idx| Step::Enter(idx)).collect();
        let mut built: Vec<Node> = Vec::with_capacity(self.arena.len());
        while let Some(step) = steps.pop() {
            match step {
                Step::Enter(idx) => {
                    if let Some(slot) = self.arena.remove(idx) {
                        steps.push(Step::Exit(slot.record, built.len()));
                        steps.extend(slot.children.into_iter().rev().map(Step::Enter));
                    }
                }
                Step::Exit(record, mark) => {
                    let children = built.split_off(mark);
                    built.push(Node::new(record, children));
                }
            }
        }
        built
    }
}
