pub mod burst;
pub mod ss_sched;
