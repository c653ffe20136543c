//! Chart builder: grouping, classification, and hierarchy resolution.

use generational_arena::Index;
use regex::Regex;
use tracing::{debug, instrument};

use crate::domain::arena::DeptArena;
use crate::domain::record::{Employee, RANK_SENTINEL, UNASSIGNED_DEPT};

/// Job titles that qualify a department for the root override.
const EXECUTIVE_TITLES: &str = r"(?i)direktor|ceo|president";

/// Builds a rooted department hierarchy from normalized employee records.
///
/// The build is pure computation over transient state: grouping, per-node
/// member sort, root and parent/child resolution, then subtree ordering.
/// Malformed input never errors; blank fields degrade to defaults and
/// unresolvable nodes are silently excluded.
pub struct ChartBuilder {
    allow_list: Vec<String>,
    executive: Regex,
}

impl ChartBuilder {
    /// `filter` is a comma-separated allow-list of contract-type codes.
    /// Entries are trimmed and upper-cased; blank entries are dropped. An
    /// empty list classifies every record as staff.
    pub fn new(filter: &str) -> Self {
        let allow_list = filter
            .split(',')
            .map(|entry| entry.trim().to_uppercase())
            .filter(|entry| !entry.is_empty())
            .collect();
        Self {
            allow_list,
            executive: Regex::new(EXECUTIVE_TITLES).unwrap(),
        }
    }

    #[instrument(level = "debug", skip(self, records), fields(records = records.len()))]
    pub fn build(&self, records: &[Employee]) -> DeptArena {
        let mut arena = DeptArena::new();
        self.group(records, &mut arena);
        self.sort_members(&mut arena);
        self.resolve(&mut arena);
        self.sort_children(&mut arena);
        debug!(
            departments = arena.len(),
            root = arena.root().is_some(),
            "chart built"
        );
        arena
    }

    fn is_staff(&self, emp: &Employee) -> bool {
        self.allow_list.is_empty()
            || self
                .allow_list
                .iter()
                .any(|code| *code == emp.contract_type.to_uppercase())
    }

    /// Single pass over the input: one node per distinct department name,
    /// created on first sight, record appended to its staff or contractor
    /// list.
    fn group(&self, records: &[Employee], arena: &mut DeptArena) {
        for emp in records {
            let dept = if emp.dept.is_empty() {
                UNASSIGNED_DEPT
            } else {
                &emp.dept
            };
            let idx = arena.ensure(dept);
            if let Some(node) = arena.get_mut(idx) {
                if self.is_staff(emp) {
                    node.staff.push(emp.clone());
                } else {
                    node.contractors.push(emp.clone());
                }
            }
        }
    }

    /// Sort each node's staff and contractor lists independently, ascending
    /// by rank code. String comparison is deliberate: fixed-width codes like
    /// "0100.01" order correctly, and the sort is stable so ties keep input
    /// order.
    fn sort_members(&self, arena: &mut DeptArena) {
        for (_, node) in arena.nodes_mut() {
            node.staff.sort_by(|a, b| a.rank_key().cmp(b.rank_key()));
            node.contractors.sort_by(|a, b| a.rank_key().cmp(b.rank_key()));
        }
    }

    /// Root and parent/child resolution over all nodes in first-seen order.
    ///
    /// A node whose representative reports no superior, or reports itself,
    /// is a root candidate. The first candidate wins unless a later one has
    /// a staff member with an executive title. Nodes with an unknown
    /// superior stay unattached and fall out of the tree; nodes with no
    /// records are skipped outright.
    fn resolve(&self, arena: &mut DeptArena) {
        let indices: Vec<Index> = arena.nodes().map(|(idx, _)| idx).collect();
        for idx in indices {
            let (name, superior, has_executive) = {
                let Some(node) = arena.get(idx) else { continue };
                let Some(rep) = node.head() else { continue };
                let has_executive = node
                    .staff
                    .iter()
                    .any(|emp| !emp.job.is_empty() && self.executive.is_match(&emp.job));
                (node.name.clone(), rep.superior.clone(), has_executive)
            };

            if superior.trim().is_empty() || superior == name {
                match arena.root() {
                    None => arena.set_root(idx),
                    Some(_) if has_executive => {
                        debug!(dept = %name, "root replaced by executive candidate");
                        arena.set_root(idx);
                    }
                    Some(_) => {}
                }
            } else if let Some(parent) = arena.lookup(&superior) {
                arena.attach(parent, idx);
            } else {
                debug!(dept = %name, superior = %superior, "unknown superior, node dropped");
            }
        }
    }

    /// Order every child list under the root by the child's boss rank.
    /// Work-stack descent, so depth is not limited by the call stack.
    fn sort_children(&self, arena: &mut DeptArena) {
        let Some(root) = arena.root() else { return };
        let mut stack = vec![root];
        while let Some(idx) = stack.pop() {
            let children = match arena.get(idx) {
                Some(node) => node.children.clone(),
                None => continue,
            };
            let mut keyed: Vec<(Index, String)> = children
                .into_iter()
                .map(|child| {
                    let rank = arena
                        .get(child)
                        .map(|node| node.head_rank().to_string())
                        .unwrap_or_else(|| RANK_SENTINEL.to_string());
                    (child, rank)
                })
                .collect();
            keyed.sort_by(|a, b| a.1.cmp(&b.1));

            let sorted: Vec<Index> = keyed.into_iter().map(|(child, _)| child).collect();
            stack.extend(sorted.iter().copied());
            if let Some(node) = arena.get_mut(idx) {
                node.children = sorted;
            }
        }
    }
}
