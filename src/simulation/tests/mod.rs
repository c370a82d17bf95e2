mod jitter;
