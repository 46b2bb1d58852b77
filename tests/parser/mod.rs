mod tests_lossless;
mod tests_pool;
mod tests_window;
