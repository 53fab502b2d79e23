//! Centralized limits and thresholds for the translator.
//!
//! Source syntax trees are acyclic, but a pathological input (generated code,
//! a fuzzer) can still nest type nodes deeply enough to exhaust the stack of
//! a recursive visitor. These constants bound that recursion.

// =============================================================================
// Recursion Depth Limits
// =============================================================================

/// Maximum nesting depth of type nodes visited by the type translator.
///
/// Each nested type argument, array element, union member, or index signature
/// side adds one level. Past this depth the translator reports a diagnostic
/// and emits `dynamic` for the remaining subtree.
///
/// # TypeScript example
///
/// ```typescript
/// // Deeply nested array / generic types:
/// let x: Array<Array<Array<Array</* ... hundreds of levels ... */>>>>;
/// let y: number[][][][][][][][][][] /* ... */;
/// ```
pub const MAX_TYPE_NODE_DEPTH: u32 = 256;
