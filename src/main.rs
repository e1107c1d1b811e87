use hanzicard::interpreter::Interpreter;
use hanzicard::vm::VmState;
use log::{debug, info};
use std::env;
use std::fs;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("hanzicard - card programming language virtual machine");
        println!();
        println!("Usage: {} <program file>", args[0]);
        println!();
        println!("Program files are UTF-8 text, one card per line:");
        println!("  读取 槽0     # load numeric slot 0 into the accumulator");
        println!("  加 5        # add a literal");
        println!("  拼接 你好    # append text to the text accumulator");
        println!("  取拼音      # replace the text accumulator with its pinyin");
        println!("  停机        # halt");
        println!();
        println!("Lines starting with # are comments.");
        return;
    }

    let program_path = &args[1];
    debug!("loading card program: {}", program_path);
    let source = match fs::read_to_string(program_path) {
        Ok(text) => text,
        Err(e) => {
            match e.kind() {
                std::io::ErrorKind::NotFound => {
                    eprintln!("Error: program file not found: {}", program_path);
                    eprintln!();
                    eprintln!("Please check the path and the directory you run from.");
                }
                _ => {
                    eprintln!("Error: cannot read program file '{}': {}", program_path, e);
                }
            }
            std::process::exit(1);
        }
    };

    let mut interpreter = Interpreter::new(VmState::new());
    interpreter.load_program(&source);
    info!("loaded {} instructions", interpreter.vm.program.len());

    interpreter.run();

    for line in interpreter.vm.take_output() {
        println!("{}", line);
    }
    println!();
    println!("{}", interpreter.vm);
}
