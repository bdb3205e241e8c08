//! Plain-text rendering of forests, timings and tree statistics.
//!
//! Everything here returns strings; printing and coloring happen in
//! [`crate::cli::output`].

use std::fmt::Write;
use std::time::Duration;

use itertools::Itertools;
use termtree::Tree;

use crate::application::services::Comparison;
use crate::domain::{Forest, Node, Strategy};

pub const RULE_WIDTH: usize = 80;

pub fn rule(c: char) -> String {
    c.to_string().repeat(RULE_WIDTH)
}

/// Deepest level drawn by [`forest_tree`]; subtrees below it are summarized.
pub const MAX_RENDER_DEPTH: usize = 32;

/// termtree rendering of `roots`, children built before their parents.
fn render_trees(roots: &[Node]) -> Vec<Tree<String>> {
    enum Step<'a> {
        Enter(&'a Node),
        Exit(&'a Node, usize),
    }

    let mut steps: Vec<Step<'_>> = roots.iter().rev().map(Step::Enter).collect();
    let mut built: Vec<Tree<String>> = Vec::with_capacity(roots.len());
    while let Some(step) = steps.pop() {
        match step {
            Step::Enter(node) if node.level + 1 >= MAX_RENDER_DEPTH && !node.is_leaf() => {
                let hidden = node.subtree_size() - 1;
                built.push(
                    Tree::new(node.to_string())
                        .with_leaves([format!("... {hidden} more categories below")]),
                );
            }
            Step::Enter(node) => {
                steps.push(Step::Exit(node, built.len()));
                steps.extend(node.children.iter().rev().map(Step::Enter));
            }
            Step::Exit(node, mark) => {
                let leaves = built.split_off(mark);
                built.push(Tree::new(node.to_string()).with_leaves(leaves));
            }
        }
    }
    built
}

/// Each root as a text tree, nodes labelled `name: description`.
pub fn forest_tree(forest: &Forest) -> String {
    if forest.is_empty() {
        return "No categories to display.".to_string();
    }
    render_trees(forest.roots()).iter().join("")
}

fn as_millis_f64(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

/// Timing comparison of the two strategies.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceSummary {
    pub scan_elapsed: Duration,
    pub indexed_elapsed: Duration,
    pub scan_nodes: usize,
    pub indexed_nodes: usize,
}

impl PerformanceSummary {
    pub fn new(comparison: &Comparison) -> Self {
        Self {
            scan_elapsed: comparison.scan.elapsed,
            indexed_elapsed: comparison.indexed.elapsed,
            scan_nodes: comparison.scan.value.node_count(),
            indexed_nodes: comparison.indexed.value.node_count(),
        }
    }

    /// Scan time minus indexed time, in milliseconds. Positive: indexed was faster.
    pub fn difference_ms(&self) -> f64 {
        as_millis_f64(self.scan_elapsed) - as_millis_f64(self.indexed_elapsed)
    }

    /// Difference relative to the scan time, in percent; 0 when scan took no time.
    pub fn percentage(&self) -> f64 {
        let scan = as_millis_f64(self.scan_elapsed);
        if scan > 0.0 {
            self.difference_ms() / scan * 100.0
        } else {
            0.0
        }
    }

    /// The faster strategy, `None` on a tie.
    pub fn faster(&self) -> Option<Strategy> {
        match self.scan_elapsed.cmp(&self.indexed_elapsed) {
            std::cmp::Ordering::Greater => Some(Strategy::Indexed),
            std::cmp::Ordering::Less => Some(Strategy::Scan),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn verdict(&self) -> String {
        let diff = self.difference_ms().abs();
        let pct = self.percentage().abs();
        match self.faster() {
            Some(strategy) => format!(
                "{} strategy is FASTER by {:.3} ms ({:.2}%)",
                strategy.label(),
                diff,
                pct
            ),
            None => "Both strategies have equal performance".to_string(),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let rows = [
            (Strategy::Scan, self.scan_elapsed, self.scan_nodes),
            (Strategy::Indexed, self.indexed_elapsed, self.indexed_nodes),
        ];
        for (i, (strategy, elapsed, nodes)) in rows.iter().enumerate() {
            let _ = writeln!(out, "{}. {}:", i + 1, strategy.label());
            let _ = writeln!(
                out,
                "   Execution Time: {} ms ({:.3} ms)",
                elapsed.as_millis(),
                as_millis_f64(*elapsed)
            );
            let _ = writeln!(out, "   Categories Count: {nodes}");
        }
        let _ = writeln!(out, "{}", rule('-'));
        let _ = write!(out, "   {}", self.verdict());
        out
    }
}

/// Maximum depth and total node count.
pub fn tree_analysis(forest: &Forest) -> String {
    format!(
        "   Maximum Tree Depth: {} levels\n   Total Categories: {}",
        forest.max_depth(),
        forest.node_count()
    )
}

/// Friendly name of a 0-based level.
pub fn level_name(level: usize) -> String {
    match level {
        0 => "Level 1 - Root Categories".to_string(),
        1 => "Level 2 - Main Subcategories".to_string(),
        2 => "Level 3 - Detailed Categories".to_string(),
        3 => "Level 4 - Specific Items".to_string(),
        n => format!("Level {}", n + 1),
    }
}

/// Per-level counts with up to `preview` names each.
pub fn level_breakdown(forest: &Forest, preview: usize) -> String {
    let mut out = String::new();
    for (level, nodes) in forest.levels().iter().enumerate() {
        let _ = writeln!(out, "\n   {}:", level_name(level));
        let _ = writeln!(out, "   Count: {} items", nodes.len());
        for node in nodes.iter().take(preview) {
            let _ = writeln!(out, "      • {}", node.name);
        }
        if nodes.len() > preview {
            let _ = writeln!(out, "      ... and {} more", nodes.len() - preview);
        }
    }
    out
}
