pub mod assignments;

pub use assignments::AssignmentService;
