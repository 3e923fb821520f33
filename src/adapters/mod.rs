// Adapters layer: concrete consoles the programs print through.

pub mod console;
