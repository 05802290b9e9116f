mod grid_properties;
mod helpers;
mod rendering;
mod selection_flow;
