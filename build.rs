use shadow_rs::ShadowBuilder;

fn main() {
    // Build metadata backs `pound-check --version`
    ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build metadata");
}
