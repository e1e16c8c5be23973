pub mod unit_group;
