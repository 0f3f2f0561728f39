use colored::Colorize;

pub fn info(message: &str) {
    println!("{}", message);
}

pub fn success(message: &str) {
    println!("{}", message.green());
}

pub fn warn(message: &str) {
    println!("{}", message.yellow());
}

pub fn error(message: &str) {
    eprintln!("{}", format!("error: {}", message).red());
}
