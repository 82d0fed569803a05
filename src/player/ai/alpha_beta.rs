use super::config::{AIConfig, EvaluationConfig};
use super::eval::calculate_score;
use crate::core::{Board, Color, Placement, Position};
use crate::error::{EngineError, EngineResult};
use crate::logic::evaluate_move;
use crate::player::PlayerController;

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Wall-clock budget of one search call.
///
/// The stop flag only ever goes from false to true; once the budget is spent
/// every later check reports it.
pub(crate) struct SearchClock {
    start: Instant,
    budget: Option<Duration>,
    stopped: Cell<bool>,
    /// Trips the clock after this many checks instead of on elapsed time
    #[cfg(test)]
    check_limit: Option<usize>,
    #[cfg(test)]
    checks: Cell<usize>,
}

impl SearchClock {
    pub(crate) fn new(budget: Option<Duration>) -> Self {
        Self {
            start: Instant::now(),
            budget,
            stopped: Cell::new(false),
            #[cfg(test)]
            check_limit: None,
            #[cfg(test)]
            checks: Cell::new(0),
        }
    }

    #[cfg(test)]
    fn with_check_limit(limit: usize) -> Self {
        Self {
            check_limit: Some(limit),
            ..Self::new(None)
        }
    }

    fn is_time_up(&self) -> bool {
        if self.stopped.get() {
            return true;
        }
        let out_of_time = matches!(self.budget, Some(budget) if self.start.elapsed() >= budget);
        #[cfg(test)]
        let out_of_time = out_of_time || {
            self.checks.set(self.checks.get() + 1);
            self.check_limit.map_or(false, |limit| self.checks.get() > limit)
        };
        if out_of_time {
            self.stopped.set(true);
        }
        out_of_time
    }

    pub(crate) fn stopped(&self) -> bool {
        self.stopped.get()
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Read-only inputs shared by every node of one search, plus the node counter.
struct SearchContext<'a> {
    me: Color,
    weights: &'a EvaluationConfig,
    clock: &'a SearchClock,
    nodes: Cell<usize>,
}

/// One board state in the game tree.
///
/// Even depths belong to the searching player (MAX), odd depths to the
/// opponent (MIN). `children` is append-only in row-major move order and
/// `best_child` indexes into it.
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub board: Board,
    /// Move that produced this node. `None` at the root.
    pub mv: Option<Position>,
    pub depth: usize,
    pub children: Vec<SearchNode>,
    pub alpha: i32,
    pub beta: i32,
    pub score: i32,
    pub best_child: Option<usize>,
}

impl SearchNode {
    pub fn root(board: Board) -> Self {
        Self::new(None, 0, board)
    }

    fn new(mv: Option<Position>, depth: usize, board: Board) -> Self {
        Self {
            board,
            mv,
            depth,
            children: Vec::new(),
            alpha: i32::MIN,
            beta: i32::MAX,
            score: 0,
            best_child: None,
        }
    }

    fn is_max(&self) -> bool {
        self.depth % 2 == 0
    }

    pub fn best(&self) -> Option<&SearchNode> {
        self.best_child.map(|idx| &self.children[idx])
    }

    /// Static score of this node's own board, stored in the bound its role uses.
    fn score_leaf(&mut self, ctx: &SearchContext) -> i32 {
        self.score = calculate_score(&self.board, ctx.me, ctx.weights);
        if self.is_max() {
            self.alpha = self.score;
        } else {
            self.beta = self.score;
        }
        self.score
    }

    /// Expands the legal moves one at a time, scoring each child as soon as it
    /// is created so a cutoff stops generation early.
    ///
    /// `incoming` is the parent's current bound. Returns alpha for MAX nodes
    /// and beta for MIN nodes. A node without legal moves is scored as a leaf.
    fn generate_children(
        &mut self,
        ctx: &SearchContext,
        max_depth: usize,
        incoming: i32,
    ) -> EngineResult<i32> {
        self.alpha = i32::MIN;
        self.beta = i32::MAX;
        self.best_child = None;
        self.children.clear();

        let child_depth = self.depth + 1;
        let mover = if child_depth % 2 == 1 {
            ctx.me
        } else {
            ctx.me.opponent()
        };

        for pos in self.board.positions() {
            let (captured, next) = evaluate_move(&self.board, pos, mover);
            if captured == 0 {
                continue;
            }

            let idx = self.children.len();
            let mut child = SearchNode::new(Some(pos), child_depth, next);
            let prune_value = if self.is_max() { self.alpha } else { self.beta };
            let child_score = child.evaluate(ctx, max_depth, prune_value)?;
            // the child's score is final; its subtree is no longer needed
            child.children = Vec::new();
            self.children.push(child);

            if self.is_max() {
                if self.best_child.is_none() || child_score > self.alpha {
                    self.alpha = child_score;
                    self.best_child = Some(idx);
                }
                self.score = self.alpha;
                if incoming <= self.alpha {
                    return Ok(self.alpha);
                }
            } else {
                if self.best_child.is_none() || child_score < self.beta {
                    self.beta = child_score;
                    self.best_child = Some(idx);
                }
                self.score = self.beta;
                if self.beta <= incoming {
                    return Ok(self.beta);
                }
            }
        }

        if self.children.is_empty() {
            // pass
            return Ok(self.score_leaf(ctx));
        }
        Ok(self.score)
    }

    /// Expands while under `max_depth` and inside the time budget, otherwise
    /// falls back to the static evaluator.
    fn evaluate(
        &mut self,
        ctx: &SearchContext,
        max_depth: usize,
        incoming: i32,
    ) -> EngineResult<i32> {
        ctx.nodes.set(ctx.nodes.get() + 1);
        let time_up = ctx.clock.is_time_up();

        if self.depth > max_depth {
            return Err(EngineError::DepthOverrun {
                depth: self.depth,
                max_depth,
            });
        }
        if self.depth < max_depth && !time_up {
            self.generate_children(ctx, max_depth, incoming)
        } else {
            Ok(self.score_leaf(ctx))
        }
    }
}

/// Result of one move search.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub placement: Placement,
    pub score: i32,
    /// Depth of the search the move came from
    pub depth: usize,
    /// False when the time budget cut that depth short
    pub completed: bool,
    pub nodes: usize,
    pub elapsed: Duration,
}

pub struct AlphaBetaAI {
    color: Color,
    name: String,
    config: AIConfig,
}

impl AlphaBetaAI {
    pub fn new(color: Color, name: &str, config: AIConfig) -> Self {
        Self {
            color,
            name: name.to_string(),
            config,
        }
    }

    /// Picks a move for `board`, or `None` when this color has no legal move.
    pub fn search(&self, board: &Board) -> EngineResult<Option<SearchReport>> {
        let clock = SearchClock::new(self.config.search.time_budget());
        let report = if self.config.search.iterative_deepening {
            self.search_root(board, &clock)?
        } else {
            self.search_to_depth(board, self.config.search.max_depth, &clock)?
        };

        match &report {
            Some(r) => log::info!(
                "{} ({}) chose {}: depth {}{}, score {}, {} nodes, {:.3}s",
                self.name,
                self.color,
                r.placement.position,
                r.depth,
                if r.completed { "" } else { " (partial)" },
                r.score,
                r.nodes,
                r.elapsed.as_secs_f64()
            ),
            None => log::info!("{} ({}) has no legal move", self.name, self.color),
        }
        Ok(report)
    }

    // --- Search Root (Iterative Deepening) ---
    fn search_root(&self, board: &Board, clock: &SearchClock) -> EngineResult<Option<SearchReport>> {
        let search = &self.config.search;
        // beyond the number of empty cells every line has already ended
        let cap = search.max_depth.min(board.empty_count()).max(1);
        let first = search.min_depth.min(cap);

        let mut best: Option<SearchReport> = None;
        let mut nodes = 0;

        for depth in first..=cap {
            let report = match self.search_to_depth(board, depth, clock)? {
                Some(r) => r,
                None => return Ok(None),
            };
            nodes += report.nodes;

            if report.completed {
                log::debug!(
                    "depth {} done: {} score {} ({} nodes)",
                    depth,
                    report.placement.position,
                    report.score,
                    report.nodes
                );
                best = Some(report);
            } else {
                log::warn!(
                    "time budget ran out during depth {}, keeping depth {}",
                    depth,
                    best.as_ref().map_or(depth, |b| b.depth)
                );
                if best.is_none() {
                    best = Some(report);
                }
                break;
            }
        }

        Ok(best.map(|mut r| {
            r.nodes = nodes;
            r.elapsed = clock.elapsed();
            r
        }))
    }

    /// Single alpha-beta search to a fixed depth.
    fn search_to_depth(
        &self,
        board: &Board,
        depth: usize,
        clock: &SearchClock,
    ) -> EngineResult<Option<SearchReport>> {
        let ctx = SearchContext {
            me: self.color,
            weights: &self.config.evaluation,
            clock,
            nodes: Cell::new(1),
        };
        let mut root = SearchNode::root(board.clone());
        root.generate_children(&ctx, depth, i32::MAX)?;

        let best = match root.best() {
            Some(child) => child,
            None => return Ok(None),
        };
        let position = match best.mv {
            Some(p) => p,
            None => return Ok(None),
        };

        Ok(Some(SearchReport {
            placement: Placement {
                position,
                board: best.board.clone(),
            },
            score: root.score,
            depth,
            completed: !clock.stopped(),
            nodes: ctx.nodes.get(),
            elapsed: clock.elapsed(),
        }))
    }
}

impl PlayerController for AlphaBetaAI {
    fn choose_move(&self, board: &Board) -> EngineResult<Option<Placement>> {
        Ok(self.search(board)?.map(|r| r.placement))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self) -> Color {
        self.color
    }
}
