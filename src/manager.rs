use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, PartialEq)]
pub struct Task {
    pub chunk: usize,
}

#[derive(Debug, PartialEq)]
enum ManagerState {
    Progress { chunk: usize },
    Drained,
    Halted,
}

/// Hands out chunk indices (image rows) to render threads until every chunk
/// is taken or the abort flag is raised.
pub struct Manager {
    chunks: usize,
    state: ManagerState,
    abort: Arc<AtomicBool>,
    issued: Vec<usize>,
}

impl Manager {
    pub fn new(chunks: usize, nthread: usize, abort: Arc<AtomicBool>) -> Self {
        let state = if chunks == 0 {
            ManagerState::Drained
        } else {
            ManagerState::Progress { chunk: 0 }
        };
        Manager {
            chunks,
            state,
            abort,
            issued: vec![0; nthread],
        }
    }

    pub fn next(&mut self, thid: usize) -> Option<Task> {
        use ManagerState::*;

        // a fully dispatched frame still completes
        if self.state != Drained && self.abort.load(Ordering::SeqCst) {
            self.state = Halted;
        }
        match self.state {
            Halted | Drained => None,
            Progress { chunk } => {
                self.state = if chunk + 1 == self.chunks {
                    Drained
                } else {
                    Progress { chunk: chunk + 1 }
                };
                self.issued[thid] += 1;
                Some(Task { chunk })
            }
        }
    }

    pub fn is_halted(&self) -> bool {
        self.state == ManagerState::Halted
    }

    /// Chunks handed to each thread so far.
    pub fn issued(&self) -> &[usize] {
        &self.issued
    }
}
