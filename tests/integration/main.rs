mod custom_transport;
mod parallel_stress;
