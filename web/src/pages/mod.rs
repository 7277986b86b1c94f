pub mod investor_dashboard;
