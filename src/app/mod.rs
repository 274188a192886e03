// Application layer: wires the fortune engine to storage and configuration for each host.

pub mod service;
