//! Crate root module declarations for the piece walk simulation.
//!
//! A knight, a bishop and a queen wander an 8x8 board one random move at a
//! time, never sharing a square. The board coordinates, per-piece move
//! generation, the piece register, and the simulation loop are exposed here
//! so the binary, benches and tests share stable module paths.

pub mod errors;

pub mod board {
    pub mod position;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod knight_moves;
    pub mod move_generator;
    pub mod queen_moves;
    pub mod ray_walk;
}

pub mod pieces {
    pub mod piece_kind;
    pub mod piece_register;
}

pub mod simulation {
    pub mod random_walk;
    pub mod report;
    pub mod walk_config;
}

pub mod utils {
    pub mod render_board;
}
