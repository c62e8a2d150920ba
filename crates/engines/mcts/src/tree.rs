//! UCB1 Monte Carlo Tree Search over whole turns.
//!
//! The tree lives in an arena (`Vec<Node>`) owned by a single [`search`]
//! call; parents are arena indices, so dropping the vector frees the tree.

use checkers_core::{legal_moves, playout_result, resolve_capture_chain, Board, Move, Player};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Exploration constant of the UCB1 formula.
pub const DEFAULT_EXPLORATION: f64 = 1.4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MctsConfig {
    /// Weight of the exploration term in UCB1
    pub exploration: f64,
    /// Optional cap on random playout length, in turns. A capped playout
    /// counts as a draw. `None` plays every playout to the end.
    pub max_playout_turns: Option<u32>,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            exploration: DEFAULT_EXPLORATION,
            max_playout_turns: None,
        }
    }
}

#[derive(Debug, Clone)]
struct Node {
    board: Board,
    /// Side to move at this node
    player: Player,
    parent: Option<usize>,
    children: Vec<usize>,
    /// Move that led here from the parent
    mv: Option<Move>,
    visits: u32,
    wins: i64,
    untried: Vec<Move>,
}

impl Node {
    fn new(board: Board, player: Player, parent: Option<usize>, mv: Option<Move>) -> Self {
        let untried = legal_moves(&board, player);
        Self {
            board,
            player,
            parent,
            children: Vec::new(),
            mv,
            visits: 0,
            wins: 0,
            untried,
        }
    }
}

/// Best root child after a search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MctsOutcome {
    pub best_move: Move,
    pub visits: u32,
    /// Accumulated playout results of the chosen child, from the root
    /// player's point of view
    pub wins: i64,
    /// Number of nodes in the tree
    pub nodes: usize,
}

/// UCB1 score of a child; unvisited children always come first.
pub fn ucb1(wins: i64, visits: u32, parent_visits: u32, exploration: f64) -> f64 {
    if visits == 0 {
        return f64::INFINITY;
    }
    let visits = visits as f64;
    wins as f64 / visits + exploration * ((parent_visits as f64).ln() / visits).sqrt()
}

/// Runs `iterations` rounds of select / expand / simulate / backpropagate
/// from `board` with `player` to move.
///
/// Returns the most visited root child (the earliest expanded one on ties),
/// or `None` if the root was never expanded (no legal moves, or zero
/// iterations).
pub fn search<R: Rng>(
    board: &Board,
    player: Player,
    iterations: u32,
    config: &MctsConfig,
    rng: &mut R,
) -> Option<MctsOutcome> {
    let arena = build_tree(board, player, iterations, config, rng);

    let root = &arena[0];
    let mut best: Option<usize> = None;
    for &child in &root.children {
        if best.map_or(true, |b| arena[child].visits > arena[b].visits) {
            best = Some(child);
        }
    }

    let best = &arena[best?];
    Some(MctsOutcome {
        best_move: best.mv?,
        visits: best.visits,
        wins: best.wins,
        nodes: arena.len(),
    })
}

fn build_tree<R: Rng>(
    board: &Board,
    player: Player,
    iterations: u32,
    config: &MctsConfig,
    rng: &mut R,
) -> Vec<Node> {
    let mut arena = vec![Node::new(board.clone(), player, None, None)];
    for _ in 0..iterations {
        let leaf = select(&arena, 0, config.exploration);
        let node = expand(&mut arena, leaf, rng);
        let result = simulate(&arena[node].board, arena[node].player, player, config, rng);
        backpropagate(&mut arena, node, result);
    }
    arena
}

/// Descends while the node is fully expanded and has children, following
/// the highest UCB1 child (first on ties).
fn select(arena: &[Node], mut idx: usize, exploration: f64) -> usize {
    while arena[idx].untried.is_empty() && !arena[idx].children.is_empty() {
        let parent_visits = arena[idx].visits;
        let mut best = arena[idx].children[0];
        let mut best_score = f64::NEG_INFINITY;
        for &child in &arena[idx].children {
            let node = &arena[child];
            let score = ucb1(node.wins, node.visits, parent_visits, exploration);
            if score > best_score {
                best_score = score;
                best = child;
            }
        }
        idx = best;
    }
    idx
}

/// Expands one random untried move of `idx`, returning the new child, or
/// `idx` itself when nothing is left to try.
fn expand<R: Rng>(arena: &mut Vec<Node>, idx: usize, rng: &mut R) -> usize {
    if arena[idx].untried.is_empty() {
        return idx;
    }
    let pick = rng.gen_range(0..arena[idx].untried.len());
    let mv = arena[idx].untried.remove(pick);

    let player = arena[idx].player;
    let mut board = arena[idx].board.clone();
    resolve_capture_chain(&mut board, mv, player);

    let child = arena.len();
    arena.push(Node::new(board, player.other(), Some(idx), Some(mv)));
    arena[idx].children.push(child);
    child
}

/// Plays uniformly random turns until a side is stuck (or the optional cap
/// is hit) and judges the result for `root_player`.
fn simulate<R: Rng>(
    board: &Board,
    to_move: Player,
    root_player: Player,
    config: &MctsConfig,
    rng: &mut R,
) -> i32 {
    let mut board = board.clone();
    let mut player = to_move;
    let mut turns = 0u32;
    loop {
        let moves = legal_moves(&board, player);
        let Some(&mv) = moves.choose(rng) else {
            break;
        };
        if config.max_playout_turns.is_some_and(|cap| turns >= cap) {
            return 0;
        }
        resolve_capture_chain(&mut board, mv, player);
        player = player.other();
        turns += 1;
    }
    playout_result(&board, root_player)
}

fn backpropagate(arena: &mut [Node], mut idx: usize, result: i32) {
    loop {
        let node = &mut arena[idx];
        node.visits += 1;
        node.wins += result as i64;
        match node.parent {
            Some(parent) => idx = parent,
            None => break,
        }
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tree_tests;
