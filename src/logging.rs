#![allow(unused_macros)]

macro_rules! bad {
    ($message:expr) => {
        println!("[!] {}", $message.bold().red())
    };
}

macro_rules! warn {
    ($message:expr) => {
        println!("[?] {}", $message.italic().yellow())
    };
}

macro_rules! info {
    ($message:expr) => {
        println!("[*] {}", $message.cyan())
    };
}

macro_rules! good {
    ($message:expr) => {
        println!("[+] {}", $message.green())
    };
}
