//! Second-line schema matching - Optimal one-to-one correspondence selection
//!
//! Turns a similarity matrix into a 0/1 correspondence matrix by solving the
//! assignment problem on cost = 1 - similarity with the Hungarian
//! (Kuhn-Munkres) algorithm.

use crate::matching::{CorrespondenceMatrix, SimilarityMatrix};

pub struct SecondLineSchemaMatcher;

impl SecondLineSchemaMatcher {
    /// Selects the cost-minimal one-to-one attribute assignment and returns
    /// it as a 0/1 matrix with the similarity matrix's shape. With unequal
    /// dimensions, surplus attributes on the larger side stay unmatched.
    pub fn match_matrix<'a>(
        &self,
        similarity_matrix: &SimilarityMatrix<'a>,
    ) -> CorrespondenceMatrix<'a> {
        let scores = similarity_matrix.matrix();
        let num_rows = scores.len();
        let num_cols = scores.first().map_or(0, |row| row.len());

        let mut matrix = vec![vec![0u8; num_cols]; num_rows];
        if num_rows > 0 && num_cols > 0 {
            let cost: Vec<Vec<f64>> = scores
                .iter()
                .map(|row| row.iter().map(|score| 1.0 - score).collect())
                .collect();
            let assignments = HungarianAlgorithm::new(cost, num_rows, num_cols).execute();
            for (row, assignment) in assignments.iter().enumerate() {
                if let Some(col) = assignment {
                    matrix[row][*col] = 1;
                }
            }
        }

        CorrespondenceMatrix::new(matrix, similarity_matrix.source(), similarity_matrix.target())
    }
}

/// O(n^3) Hungarian algorithm over a rectangular cost matrix, padded to a
/// square internally. Workers are source attributes, jobs target attributes.
struct HungarianAlgorithm {
    cost: Vec<Vec<f64>>,
    num_rows: usize,
    num_cols: usize,
    dimension: usize,
    label_by_worker: Vec<f64>,
    label_by_job: Vec<f64>,
    min_slack_worker_by_job: Vec<usize>,
    min_slack_value_by_job: Vec<f64>,
    match_job_by_worker: Vec<Option<usize>>,
    match_worker_by_job: Vec<Option<usize>>,
    parent_worker_by_committed_job: Vec<Option<usize>>,
    committed_workers: Vec<bool>,
}

impl HungarianAlgorithm {
    fn new(cost: Vec<Vec<f64>>, num_rows: usize, num_cols: usize) -> Self {
        let dimension = num_rows.max(num_cols);
        let mut padded = vec![vec![0.0; dimension]; dimension];
        for (row, costs) in cost.iter().enumerate() {
            padded[row][..costs.len()].copy_from_slice(costs);
        }
        Self {
            cost: padded,
            num_rows,
            num_cols,
            dimension,
            label_by_worker: vec![0.0; dimension],
            label_by_job: vec![0.0; dimension],
            min_slack_worker_by_job: vec![0; dimension],
            min_slack_value_by_job: vec![0.0; dimension],
            match_job_by_worker: vec![None; dimension],
            match_worker_by_job: vec![None; dimension],
            parent_worker_by_committed_job: vec![None; dimension],
            committed_workers: vec![false; dimension],
        }
    }

    /// Runs the assignment; entry `worker` holds the job assigned to that
    /// worker, restricted to the real (unpadded) rows and columns.
    fn execute(mut self) -> Vec<Option<usize>> {
        self.reduce_matrix();
        self.compute_initial_labels();
        self.greedy_match();
        while let Some(worker) = self.first_unassigned_worker() {
            self.initialize_phase(worker);
            self.execute_phase();
        }
        self.match_job_by_worker[..self.num_rows]
            .iter()
            .map(|assignment| assignment.filter(|job| *job < self.num_cols))
            .collect()
    }

    /// Subtracts each row's and then each column's minimum.
    fn reduce_matrix(&mut self) {
        for row in &mut self.cost {
            let min = row.iter().cloned().fold(f64::INFINITY, f64::min);
            for cell in row.iter_mut() {
                *cell -= min;
            }
        }
        for job in 0..self.dimension {
            let min = (0..self.dimension)
                .map(|worker| self.cost[worker][job])
                .fold(f64::INFINITY, f64::min);
            for worker in 0..self.dimension {
                self.cost[worker][job] -= min;
            }
        }
    }

    fn compute_initial_labels(&mut self) {
        for job in 0..self.dimension {
            self.label_by_job[job] = (0..self.dimension)
                .map(|worker| self.cost[worker][job])
                .fold(f64::INFINITY, f64::min);
        }
    }

    fn greedy_match(&mut self) {
        for worker in 0..self.dimension {
            for job in 0..self.dimension {
                if self.match_job_by_worker[worker].is_none()
                    && self.match_worker_by_job[job].is_none()
                    && self.slack(worker, job) == 0.0
                {
                    self.assign(worker, job);
                }
            }
        }
    }

    fn slack(&self, worker: usize, job: usize) -> f64 {
        self.cost[worker][job] - self.label_by_worker[worker] - self.label_by_job[job]
    }

    fn first_unassigned_worker(&self) -> Option<usize> {
        self.match_job_by_worker.iter().position(Option::is_none)
    }

    fn initialize_phase(&mut self, worker: usize) {
        self.committed_workers.fill(false);
        self.parent_worker_by_committed_job.fill(None);
        self.committed_workers[worker] = true;
        for job in 0..self.dimension {
            self.min_slack_value_by_job[job] = self.slack(worker, job);
            self.min_slack_worker_by_job[job] = worker;
        }
    }

    /// Grows the alternating tree from the phase's root worker until an
    /// augmenting path to an unmatched job is found.
    fn execute_phase(&mut self) {
        loop {
            let mut min_slack: Option<(f64, usize, usize)> = None;
            for job in 0..self.dimension {
                if self.parent_worker_by_committed_job[job].is_none() {
                    let slack = self.min_slack_value_by_job[job];
                    if min_slack.map_or(true, |(value, _, _)| slack < value) {
                        min_slack = Some((slack, self.min_slack_worker_by_job[job], job));
                    }
                }
            }
            let Some((min_slack_value, min_slack_worker, min_slack_job)) = min_slack else {
                return;
            };

            if min_slack_value > 0.0 {
                self.update_labels(min_slack_value);
            }
            self.parent_worker_by_committed_job[min_slack_job] = Some(min_slack_worker);

            match self.match_worker_by_job[min_slack_job] {
                None => {
                    self.augment_matching(min_slack_job);
                    return;
                }
                Some(worker) => {
                    self.committed_workers[worker] = true;
                    for job in 0..self.dimension {
                        if self.parent_worker_by_committed_job[job].is_none() {
                            let slack = self.slack(worker, job);
                            if self.min_slack_value_by_job[job] > slack {
                                self.min_slack_value_by_job[job] = slack;
                                self.min_slack_worker_by_job[job] = worker;
                            }
                        }
                    }
                }
            }
        }
    }

    fn update_labels(&mut self, slack: f64) {
        for worker in 0..self.dimension {
            if self.committed_workers[worker] {
                self.label_by_worker[worker] += slack;
            }
        }
        for job in 0..self.dimension {
            if self.parent_worker_by_committed_job[job].is_some() {
                self.label_by_job[job] -= slack;
            } else {
                self.min_slack_value_by_job[job] -= slack;
            }
        }
    }

    fn augment_matching(&mut self, job: usize) {
        let mut committed_job = job;
        while let Some(parent_worker) = self.parent_worker_by_committed_job[committed_job] {
            let previous_job = self.match_job_by_worker[parent_worker];
            self.assign(parent_worker, committed_job);
            match previous_job {
                Some(next_job) => committed_job = next_job,
                None => return,
            }
        }
    }

    fn assign(&mut self, worker: usize, job: usize) {
        self.match_job_by_worker[worker] = Some(job);
        self.match_worker_by_job[job] = Some(worker);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::FirstLineSchemaMatcher;
    use crate::relation::{Attribute, Relation};

    fn relation(name: &str, columns: &[(&str, &[&str])]) -> Relation {
        Relation::new(
            name,
            columns
                .iter()
                .map(|(attribute, _)| Attribute::new(*attribute))
                .collect(),
            columns
                .iter()
                .map(|(_, values)| values.iter().map(|value| value.to_string()).collect())
                .collect(),
        )
        .unwrap()
    }

    fn assignments(cost: Vec<Vec<f64>>, rows: usize, cols: usize) -> Vec<Option<usize>> {
        HungarianAlgorithm::new(cost, rows, cols).execute()
    }

    #[test]
    fn test_hungarian_diagonal_optimum() {
        let cost = vec![
            vec![0.0, 1.0, 1.0],
            vec![1.0, 0.0, 1.0],
            vec![1.0, 1.0, 0.0],
        ];
        assert_eq!(
            assignments(cost, 3, 3),
            vec![Some(0), Some(1), Some(2)]
        );
    }

    #[test]
    fn test_hungarian_picks_global_optimum_over_greedy() {
        // Greedy on row 0 would take job 0 (cost 1), forcing 10 + 1 = 11
        // overall; the optimum is the anti-diagonal with 2 + 4 = 6.
        let cost = vec![vec![1.0, 2.0], vec![4.0, 10.0]];
        assert_eq!(assignments(cost, 2, 2), vec![Some(1), Some(0)]);
    }

    #[test]
    fn test_hungarian_rectangular_leaves_surplus_unmatched() {
        let cost = vec![vec![0.0, 5.0], vec![0.5, 0.0], vec![0.1, 9.0]];
        let result = assignments(cost, 3, 2);
        let matched: Vec<usize> = result.iter().flatten().copied().collect();
        assert_eq!(result.len(), 3);
        assert_eq!(matched.len(), 2);
        assert_eq!(result.iter().filter(|a| a.is_none()).count(), 1);
    }

    #[test]
    fn test_correspondences_follow_similarity() {
        let source = relation(
            "s",
            &[("id", &["1", "2", "3"]), ("name", &["ada", "bob", "cyd"])],
        );
        let target = relation(
            "t",
            &[("person", &["bob", "ada", "cyd"]), ("key", &["2", "3", "1"])],
        );
        let similarity = FirstLineSchemaMatcher.match_relations(&source, &target);
        let correspondences = SecondLineSchemaMatcher.match_matrix(&similarity);
        // id matches key, name matches person.
        assert_eq!(correspondences.pairs(), vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn test_empty_matrix_yields_empty_correspondences() {
        let source = relation("s", &[]);
        let target = relation("t", &[("a", &["x"])]);
        let similarity = FirstLineSchemaMatcher.match_relations(&source, &target);
        let correspondences = SecondLineSchemaMatcher.match_matrix(&similarity);
        assert!(correspondences.pairs().is_empty());
    }
}
