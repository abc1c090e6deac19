//! Deterministic Huffman tree construction.
//!
//! The tree is held in parent-pointer form: `parent[id]` names the parent of
//! node `id`. Ids 0-10 are permanently the leaves for the 11 symbols; ids 11
//! and up are internal nodes in strictly increasing creation order, so the
//! last internal node created is always the root (each merge removes two
//! candidates and adds one).
//!
//! Construction is the greedy merge of the two lowest-weight undecided
//! nodes, with ties broken by smaller id. The tie-break is pinned because
//! the wire format never retransmits frequencies: encoder and decoder must
//! rebuild identical shapes from identical counts.
//!
//! Degenerate alphabets (0 or 1 distinct symbols) get their own tagged
//! variants instead of being forced through the two-child merge.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::alphabet::{Symbol, SymbolCounts, ALPHABET_SIZE, MAX_NODES};
use crate::error::CorruptHeaderError;

/// Node identifier; leaves are 0-10, internal nodes 11-20.
pub type NodeId = u8;

/// First internal node id.
pub const FIRST_INTERNAL: NodeId = ALPHABET_SIZE as NodeId;

/// A Huffman tree over the 11-symbol alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanTree {
    /// No symbols occur; there are no codes and the body is always empty.
    Empty,
    /// Exactly one distinct symbol, coded with the fixed one-bit code `0`.
    Single { symbol: Symbol },
    /// Two or more distinct symbols; the general parent-pointer tree.
    Full(ParentTree),
}

impl HuffmanTree {
    /// Build the canonical tree for a frequency table.
    pub fn from_counts(counts: &SymbolCounts) -> HuffmanTree {
        let present: Vec<(Symbol, u64)> = counts.present().collect();
        match present.as_slice() {
            [] => HuffmanTree::Empty,
            [(symbol, _)] => HuffmanTree::Single { symbol: *symbol },
            _ => HuffmanTree::Full(ParentTree::merge(&present)),
        }
    }
}

/// Parent-pointer representation of a full binary Huffman tree.
///
/// Leaves of absent symbols and the root both have no parent; the two cases
/// are distinguished by id range (leaves are always below [`FIRST_INTERNAL`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentTree {
    parent: [Option<NodeId>; MAX_NODES],
    nodes: usize,
}

impl ParentTree {
    /// Greedy merge over the present leaves.
    ///
    /// The heap orders by `(weight, id)`: equal weights always resolve to
    /// the smaller id.
    fn merge(present: &[(Symbol, u64)]) -> ParentTree {
        let mut parent = [None; MAX_NODES];
        let mut heap: BinaryHeap<Reverse<(u64, NodeId)>> = present
            .iter()
            .map(|&(symbol, weight)| Reverse((weight, symbol.index() as NodeId)))
            .collect();

        let mut next_id = FIRST_INTERNAL;
        while let (Some(Reverse((weight_a, a))), Some(Reverse((weight_b, b)))) =
            (heap.pop(), heap.pop())
        {
            parent[a as usize] = Some(next_id);
            parent[b as usize] = Some(next_id);
            heap.push(Reverse((weight_a + weight_b, next_id)));
            next_id += 1;
        }

        ParentTree {
            parent,
            nodes: next_id as usize,
        }
    }

    /// Construct from a parsed parent array (header decode path).
    ///
    /// The caller is responsible for validating the result, see
    /// [`ParentTree::check_arity`].
    pub(crate) fn from_parts(parent: [Option<NodeId>; MAX_NODES], nodes: usize) -> ParentTree {
        ParentTree { parent, nodes }
    }

    /// Total node ids in use: the 11 leaf ids plus every created internal id.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Number of internal nodes.
    pub fn internal_count(&self) -> usize {
        self.nodes - ALPHABET_SIZE
    }

    /// Id of the root (the last internal node created).
    pub fn root(&self) -> NodeId {
        self.nodes as NodeId - 1
    }

    /// Parent of `id`, if it has one.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent[id as usize]
    }

    /// True if the leaf for `symbol` participates in the tree.
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.parent[symbol.index()].is_some()
    }

    /// Child slots for every internal node, derived by the ascending-id scan
    /// rule shared with the header format: the first node to name a parent
    /// registers as its bit-0 child, the second as its bit-1 child.
    pub fn child_slots(&self) -> ChildSlots {
        ChildSlots::scan(self)
    }

    /// Validate that every internal node has exactly two registered
    /// children. Used by the header decoder; trees built by `merge` satisfy
    /// this by construction.
    pub(crate) fn check_arity(&self) -> Result<(), CorruptHeaderError> {
        let mut children = [0u8; MAX_NODES];
        for id in 0..self.nodes as NodeId {
            if let Some(p) = self.parent(id) {
                children[p as usize] += 1;
            }
        }
        for id in FIRST_INTERNAL..self.nodes as NodeId {
            if children[id as usize] != 2 {
                return Err(CorruptHeaderError::BadChildCount {
                    node: id,
                    children: children[id as usize],
                });
            }
        }
        Ok(())
    }
}

/// First- and second-registered children for every internal node.
#[derive(Debug, Clone)]
pub struct ChildSlots {
    slots: [[Option<NodeId>; 2]; MAX_NODES],
}

impl ChildSlots {
    fn scan(tree: &ParentTree) -> ChildSlots {
        let mut slots = [[None; 2]; MAX_NODES];
        for id in 0..tree.node_count() as NodeId {
            if let Some(p) = tree.parent(id) {
                let slot = &mut slots[p as usize];
                if slot[0].is_none() {
                    slot[0] = Some(id);
                } else if slot[1].is_none() {
                    slot[1] = Some(id);
                }
            }
        }
        ChildSlots { slots }
    }

    /// Child of `parent` selected by `bit` (false = first registered).
    pub fn child(&self, parent: NodeId, bit: bool) -> Option<NodeId> {
        self.slots[parent as usize][usize::from(bit)]
    }

    /// Which bit selects `child` under `parent` (false = first registered).
    pub fn bit_for(&self, parent: NodeId, child: NodeId) -> Option<bool> {
        let slot = self.slots[parent as usize];
        if slot[0] == Some(child) {
            Some(false)
        } else if slot[1] == Some(child) {
            Some(true)
        } else {
            None
        }
    }
}
