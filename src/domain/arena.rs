use std::collections::HashMap;
use std::fmt;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::record::{Employee, RANK_SENTINEL};

/// Aggregate of employee records sharing a department name, plus links to
/// child departments.
#[derive(Debug)]
pub struct Department {
    /// Department name, unique per build
    pub name: String,
    /// Staff members, rank order after the build's member sort
    pub staff: Vec<Employee>,
    /// Contractors, rank order after the build's member sort
    pub contractors: Vec<Employee>,
    /// Child department indices in the arena
    pub children: Vec<Index>,
    /// Marks synthetic contractor-only nodes; carried for consumers, unused
    /// by the build itself
    pub contractor_node: bool,
}

impl Department {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            staff: Vec::new(),
            contractors: Vec::new(),
            children: Vec::new(),
            contractor_node: false,
        }
    }

    /// Representative record: first staff member, else first contractor.
    pub fn head(&self) -> Option<&Employee> {
        self.staff.first().or_else(|| self.contractors.first())
    }

    /// Rank key of the representative record, sentinel when the node has no
    /// records or the representative carries no rank.
    pub fn head_rank(&self) -> &str {
        match self.head() {
            Some(emp) => emp.rank_key(),
            None => RANK_SENTINEL,
        }
    }

    pub fn member_count(&self) -> usize {
        self.staff.len() + self.contractors.len()
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Arena-backed department store keyed by name.
///
/// Names are the only stable join key across normalization and build phases,
/// so lookups go through an explicit name-to-index map rather than node
/// identity. Nodes are created exactly once per build and never removed;
/// arena iteration therefore yields first-seen order.
#[derive(Debug, Default)]
pub struct DeptArena {
    arena: Arena<Department>,
    by_name: HashMap<String, Index>,
    root: Option<Index>,
}

impl DeptArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the node for `name`, creating it on first sight.
    #[instrument(level = "trace", skip(self))]
    pub fn ensure(&mut self, name: &str) -> Index {
        if let Some(&idx) = self.by_name.get(name) {
            return idx;
        }
        let idx = self.arena.insert(Department::new(name));
        self.by_name.insert(name.to_string(), idx);
        idx
    }

    pub fn lookup(&self, name: &str) -> Option<Index> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, idx: Index) -> Option<&Department> {
        self.arena.get(idx)
    }

    pub fn get_mut(&mut self, idx: Index) -> Option<&mut Department> {
        self.arena.get_mut(idx)
    }

    /// Root department, `None` when the build found no root candidate.
    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub(crate) fn set_root(&mut self, idx: Index) {
        self.root = Some(idx);
    }

    /// Attach `child` under `parent`. Idempotent: re-running resolution never
    /// lists the same child twice.
    #[instrument(level = "trace", skip(self))]
    pub fn attach(&mut self, parent: Index, child: Index) {
        if let Some(node) = self.arena.get_mut(parent) {
            if !node.children.contains(&child) {
                node.children.push(child);
            }
        }
    }

    /// All nodes in first-seen order, attached or not.
    pub fn nodes(&self) -> impl Iterator<Item = (Index, &Department)> {
        self.arena.iter()
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = (Index, &mut Department)> {
        self.arena.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Depth-first iteration over the resolved tree, children left to right.
    pub fn iter(&self) -> TreeIterator {
        TreeIterator::new(self)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(Index, usize)> = self.root.map(|root| (root, 1)).into_iter().collect();
        while let Some((idx, depth)) = stack.pop() {
            if depth > max_depth {
                max_depth = depth;
            }
            if let Some(node) = self.get(idx) {
                for &child in &node.children {
                    stack.push((child, depth + 1));
                }
            }
        }
        max_depth
    }
}

pub struct TreeIterator<'a> {
    arena: &'a DeptArena,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(arena: &'a DeptArena) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push(root);
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a Department);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}
