use clap::crate_version;

pub fn execute() {
    println!("STARTER version: {}", crate_version!());
}
