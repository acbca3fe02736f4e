mod task_row;

pub use task_row::TaskRow;
