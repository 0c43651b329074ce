pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter("info,vexel_text=debug")
        .init();
}
