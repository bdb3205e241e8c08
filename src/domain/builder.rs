//! The two competing tree assembly strategies.
//!
//! Both return a [`Forest`] with levels assigned and apply the same orphan
//! policy: a record whose parent id does not resolve is dropped, together with
//! everything below it.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, instrument};

use crate::domain::{Forest, JoinedRecord, Node, NodeArena, Record};

/// Tree assembly strategy under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Recursive filtering over the whole joined record list, O(N²).
    Scan,
    /// Id-indexed single pass plus a name sort, O(N log N).
    Indexed,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Scan, Strategy::Indexed];

    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Scan => "Eager join + recursive scan",
            Strategy::Indexed => "Projection + indexed single pass",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Scan => write!(f, "scan"),
            Strategy::Indexed => write!(f, "indexed"),
        }
    }
}

/// Builds the forest by re-scanning the complete record list for every node.
///
/// Roots and children keep the order in which the store returned them.
/// The eagerly attached child ids are ignored.
#[instrument(level = "debug", skip(records), fields(records = records.len()))]
pub fn build_by_scan(records: &[JoinedRecord]) -> Forest {
    enum Step<'a> {
        Enter(&'a Record),
        Exit(&'a Record, usize),
    }

    let mut steps: Vec<Step<'_>> = records
        .iter()
        .rev()
        .filter(|r| r.record.is_root())
        .map(|r| Step::Enter(&r.record))
        .collect();
    let mut built: Vec<Node> = Vec::new();

    while let Some(step) = steps.pop() {
        match step {
            Step::Enter(record) => {
                steps.push(Step::Exit(record, built.len()));
                let children: Vec<&Record> = records
                    .iter()
                    .map(|candidate| &candidate.record)
                    .filter(|candidate| candidate.parent_id == Some(record.id))
                    .collect();
                steps.extend(children.into_iter().rev().map(Step::Enter));
            }
            Step::Exit(record, mark) => {
                let children = built.split_off(mark);
                built.push(Node::new(record.clone(), children));
            }
        }
    }

    debug!(roots = built.len(), "scan assembly complete");
    Forest::from_roots(built)
}

/// Builds the forest through an id → arena index lookup in two linear passes,
/// then orders roots and every child list by name.
#[instrument(level = "debug", skip(records), fields(records = records.len()))]
pub fn build_indexed(records: &[Record]) -> Forest {
    let mut arena = NodeArena::with_capacity(records.len());

    // Pass 1: allocate. `slots[i]` is the node of `records[i]`, duplicates included.
    let slots: Vec<_> = records
        .iter()
        .map(|r| arena.insert_node(r.clone()))
        .collect();
    let lookup: HashMap<i64, _> = records
        .iter()
        .zip(slots.iter().copied())
        .map(|(r, idx)| (r.id, idx))
        .collect();

    // Pass 2: link
    let mut orphans = 0usize;
    for (record, &idx) in records.iter().zip(&slots) {
        match record.parent_id {
            None => arena.push_root(idx),
            Some(parent_id) => match lookup.get(&parent_id) {
                Some(&parent_idx) => {
                    arena.attach(parent_idx, idx);
                }
                None => {
                    debug!(id = record.id, parent_id, "dropping orphan record");
                    orphans += 1;
                }
            },
        }
    }

    let mut forest = arena.into_forest();
    forest.sort_by_name();
    debug!(
        roots = forest.root_count(),
        nodes = forest.node_count(),
        orphans,
        "indexed assembly complete"
    );
    forest
}
