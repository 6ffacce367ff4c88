pub mod observed_table;
pub mod parameter_select;
pub mod predicted_table;
pub mod run_inputs;
pub mod selections_panel;
pub mod view_tabs;
