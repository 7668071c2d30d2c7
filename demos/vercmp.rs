use std::cmp::Ordering;

use alpm_vercmp::Version;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let (arg_ver1, arg_ver2) = match (args.next(), args.next()) {
        (Some(ver1), Some(ver2)) => (ver1, ver2),
        _ => {
            eprintln!("Usage: vercmp <version1> <version2>");
            std::process::exit(2)
        }
    };
    let ver1 = Version::try_from(arg_ver1.as_str())?;
    let ver2 = Version::try_from(arg_ver2.as_str())?;
    let order = ver1.compare(&ver2);
    eprintln!("Comparing version '{}' as '{:?}' and version '{}' as '{:?}': {:?}",
        arg_ver1, ver1, arg_ver2, ver2, order);
    match order {
        Ordering::Greater => println!("1"),
        Ordering::Equal => println!("0"),
        Ordering::Less => println!("-1")
    }
    Ok(())
}
