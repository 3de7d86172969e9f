mod viewer;

fn main() -> Result<(), eframe::Error> {
    viewer::run()
}
