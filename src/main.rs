use fib_growth::Demo;

fn main() {
    let mut demo = Demo::default().configure_from_args();
    if let Err(e) = demo.run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
