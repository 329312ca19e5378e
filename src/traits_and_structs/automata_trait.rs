use randomize::PCG32;

/// What a renderer or timer loop needs from an automaton it drives.
pub trait CellAutomata {
    /// Advance one generation.
    fn step(&mut self);
    fn clear(&mut self);
    fn randomize(&mut self, rng: &mut PCG32);
    fn describe() -> String;
}
