mod exchange;
mod mock;
