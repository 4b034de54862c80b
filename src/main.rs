fn main() {
    sift::cli::run();
}
