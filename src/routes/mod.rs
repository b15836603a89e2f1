pub mod assignments;

pub use assignments::configure_assignments_routes;
