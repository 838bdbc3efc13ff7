pub(crate) mod block;
pub(crate) mod centering;
pub(crate) mod fitment;
