pub(crate) mod events;
pub(crate) mod frame_loop;
pub(crate) mod stage;
