//! Text progress reporting.
//!
//! The engine itself never prints. [`LogObserver`] turns engine callbacks into
//! lines and hands them to an [`InfoLogger`], which decides where they go.

use crate::ga::{EvolutionObserver, EvolutionResult};
use std::sync::Arc;

/// A logger for informational messages.
pub type InfoLogger = Arc<dyn Fn(&str)>;

/// Returns a logger that writes each message to stdout.
pub fn stdout_logger() -> InfoLogger {
    Arc::new(|msg: &str| println!("{msg}"))
}

/// Writes `Generation {i}: {cost}` lines and a final summary.
#[derive(Clone)]
pub struct LogObserver {
    logger: InfoLogger,
    log_best: usize,
}

impl LogObserver {
    /// Creates an observer that logs every generation.
    pub fn new(logger: InfoLogger) -> Self {
        Self { logger, log_best: 1 }
    }

    /// Logs only every `n`-th generation (`0` disables per-generation lines).
    pub fn with_log_best(mut self, n: usize) -> Self {
        self.log_best = n;
        self
    }
}

impl EvolutionObserver for LogObserver {
    fn on_generation(&self, generation: usize, best_cost: f64) {
        if self.log_best > 0 && generation % self.log_best == 0 {
            (self.logger)(&format!("Generation {generation}: {best_cost}"));
        }
    }

    fn on_termination(&self, result: &EvolutionResult) {
        (self.logger)(&format!("Best path: {}", result.best));
        (self.logger)(&format!("Best path cost: {}", result.best_cost));
        if result.cancelled {
            (self.logger)(&format!("Cancelled after {} generations", result.generations));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::{EngineConfig, EvolutionEngine};
    use crate::problem::CostModel;
    use std::sync::Mutex;

    fn capture() -> (InfoLogger, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink = lines.clone();
        let logger: InfoLogger =
            Arc::new(move |msg: &str| sink.lock().unwrap().push(msg.to_string()));
        (logger, lines)
    }

    fn triangle() -> CostModel {
        CostModel::new(vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 3.0],
            vec![2.0, 3.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_logs_generations_and_summary() {
        let (logger, lines) = capture();
        let costs = triangle();
        let config = EngineConfig::default()
            .with_population_size(6)
            .with_generations(3)
            .with_seed(4);
        EvolutionEngine::new(&costs, config)
            .unwrap()
            .run(&LogObserver::new(logger))
            .unwrap();

        let lines = lines.lock().unwrap();
        assert_eq!(lines.len(), 5);
        // Every cyclic tour over three locations costs 6.
        assert_eq!(lines[0], "Generation 0: 6");
        assert_eq!(lines[2], "Generation 2: 6");
        assert!(lines[3].starts_with("Best path: ["));
        assert_eq!(lines[4], "Best path cost: 6");
    }

    #[test]
    fn test_log_best_interval() {
        let (logger, lines) = capture();
        let observer = LogObserver::new(logger).with_log_best(10);
        for generation in 0..25 {
            observer.on_generation(generation, 1.5);
        }
        assert_eq!(
            *lines.lock().unwrap(),
            ["Generation 0: 1.5", "Generation 10: 1.5", "Generation 20: 1.5"]
        );
    }

    #[test]
    fn test_log_best_disabled() {
        let (logger, lines) = capture();
        let observer = LogObserver::new(logger).with_log_best(0);
        observer.on_generation(0, 1.0);
        assert!(lines.lock().unwrap().is_empty());
    }
}
