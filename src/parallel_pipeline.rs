// THEORY:
// Analyses of different images share nothing but the read-only analyzer, so a
// batch is embarrassingly parallel. The `BatchAnalyzer` keeps the pool shape
// of a classic dispatcher/worker setup:
//
// - One dispatcher task receives jobs and hands them round-robin to workers.
// - Each worker owns its own channel and processes its jobs in arrival order.
// - Profiling is CPU-bound, so each worker runs it through `spawn_blocking`
//   instead of stalling the async runtime.
// - Every job carries a `oneshot` sender; the caller awaits only its own reply.
//
// Each job gets its own random source: a fixed seed makes the job reproducible
// regardless of which worker picks it up, no seed means OS entropy.

use crate::core_modules::random_source::{self, RandomSource};
use crate::error::{AnalysisError, Result};
use crate::pipeline::{AnalysisReport, FoodAnalyzer};
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

/// One frame to analyze in a batch.
#[derive(Debug, Clone)]
pub struct FrameJob {
    /// Raw RGBA bytes, canvas-sized.
    pub frame: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub seed: Option<u64>,
}

impl FrameJob {
    pub fn new(frame: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            frame,
            width,
            height,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

struct FrameTask {
    job: FrameJob,
    result_sender: oneshot::Sender<Result<AnalysisReport>>,
}

pub struct BatchAnalyzer {
    task_sender: mpsc::UnboundedSender<FrameTask>,
    workers: Vec<JoinHandle<()>>,
}

impl BatchAnalyzer {
    /// Spawns the dispatcher and `workers` worker tasks on the current runtime.
    /// A worker count of zero means one per logical CPU.
    pub fn new(analyzer: Arc<FoodAnalyzer>, workers: usize) -> Self {
        let worker_count = match workers {
            0 => num_cpus::get().max(1),
            n => n,
        };
        let (task_sender, mut task_receiver) = mpsc::unbounded_channel::<FrameTask>();

        let (worker_senders, worker_receivers): (Vec<_>, Vec<_>) = (0..worker_count)
            .map(|_| mpsc::unbounded_channel::<FrameTask>())
            .unzip();

        tokio::spawn(async move {
            let mut worker_idx = 0;
            while let Some(task) = task_receiver.recv().await {
                if let Err(mpsc::error::SendError(task)) = worker_senders[worker_idx].send(task) {
                    tracing::warn!(worker_idx, "Worker channel closed; dropping job");
                    let _ = task
                        .result_sender
                        .send(Err(AnalysisError::worker_pool("worker channel closed")));
                }
                worker_idx = (worker_idx + 1) % worker_count;
            }
        });

        let mut handles = Vec::with_capacity(worker_count);
        for (worker_idx, mut worker_receiver) in worker_receivers.into_iter().enumerate() {
            let worker_analyzer = Arc::clone(&analyzer);

            let worker = tokio::spawn(async move {
                while let Some(task) = worker_receiver.recv().await {
                    let analyzer = Arc::clone(&worker_analyzer);
                    let outcome =
                        tokio::task::spawn_blocking(move || Self::run_job(&analyzer, task.job))
                            .await
                            .unwrap_or_else(|join_error| {
                                tracing::warn!(
                                    worker_idx,
                                    error = %join_error,
                                    "Analysis task failed"
                                );
                                Err(AnalysisError::worker_pool(format!(
                                    "analysis task failed: {join_error}"
                                )))
                            });

                    let _ = task.result_sender.send(outcome);
                }
            });

            handles.push(worker);
        }

        tracing::debug!(workers = worker_count, "Batch analyzer started");

        Self {
            task_sender,
            workers: handles,
        }
    }

    /// Pool sized to the number of logical CPUs.
    pub fn with_default_workers(analyzer: Arc<FoodAnalyzer>) -> Self {
        Self::new(analyzer, 0)
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    fn run_job(analyzer: &FoodAnalyzer, job: FrameJob) -> Result<AnalysisReport> {
        let mut rng = match job.seed {
            Some(seed) => random_source::seeded(seed),
            None => random_source::from_entropy(),
        };
        let rng: &mut dyn RandomSource = &mut rng;
        analyzer.analyze_frame(&job.frame, job.width, job.height, rng)
    }

    pub async fn analyze(&self, job: FrameJob) -> Result<AnalysisReport> {
        let (result_sender, result_receiver) = oneshot::channel();

        self.task_sender
            .send(FrameTask { job, result_sender })
            .map_err(|_| AnalysisError::worker_pool("Failed to send task to worker pool"))?;

        result_receiver
            .await
            .map_err(|_| AnalysisError::worker_pool("Failed to receive result from worker"))?
    }

    /// Analyzes every job concurrently. Results come back in job order.
    pub async fn analyze_all(&self, jobs: Vec<FrameJob>) -> Vec<Result<AnalysisReport>> {
        join_all(jobs.into_iter().map(|job| self.analyze(job))).await
    }
}
