mod domain;
mod mechanic;
