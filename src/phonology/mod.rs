//! Symbol classification and syllable-structure legality

/// Class automaton encoding legal syllable shapes
pub mod automaton;
/// Bit set over phonological classes
pub mod classes;
/// Symbols, classes and the symbol-to-class table
pub mod symbols;
