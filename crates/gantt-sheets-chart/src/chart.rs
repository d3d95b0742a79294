//! Gantt chart definition

use chrono::NaiveDate;

use crate::axis::TimeAxis;
use crate::error::{ChartError, ChartResult};
use gantt_sheets_core::Task;

/// A Gantt chart: tasks in source order over a shared time axis
#[derive(Debug, Clone)]
pub struct GanttChart {
    /// Chart title
    pub title: Option<String>,
    tasks: Vec<Task>,
    axis: TimeAxis,
}

impl GanttChart {
    /// Create a chart; the axis spans the earliest start to the latest end.
    ///
    /// Fails with [`ChartError::NoTasks`] when `tasks` is empty.
    pub fn new(tasks: Vec<Task>) -> ChartResult<Self> {
        let start = tasks.iter().map(Task::start_date).min();
        let end = tasks.iter().map(Task::end_date).max();

        let (Some(start), Some(end)) = (start, end) else {
            return Err(ChartError::NoTasks);
        };

        let axis = TimeAxis::new(start, end.max(start));
        log::debug!(
            "Chart of {} tasks spans {} to {}",
            tasks.len(),
            axis.start(),
            axis.end()
        );

        Ok(Self {
            title: None,
            tasks,
            axis,
        })
    }

    /// Set chart title
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Tasks in source order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Time axis
    pub fn axis(&self) -> &TimeAxis {
        &self.axis
    }

    /// Earliest start date
    pub fn start(&self) -> NaiveDate {
        self.axis.start()
    }

    /// Latest end date
    pub fn end(&self) -> NaiveDate {
        self.axis.end()
    }

    /// First day of every month within the chart span
    pub fn month_ticks(&self) -> Vec<NaiveDate> {
        self.axis.month_ticks()
    }

    /// Month slot of `date`, counting the start month as 1
    pub fn month_index(&self, date: NaiveDate) -> i32 {
        self.axis.month_index(date)
    }
}
