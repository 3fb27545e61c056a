mod window_manager;
