use dotenvy::dotenv_iter;

fn main() {
    println!("cargo:rerun-if-changed=.env");

    // Bake the variables of .env (e.g. SERVER_ADDR) into the binary
    let Ok(vars) = dotenv_iter() else { return };
    for (k, v) in vars.flatten() {
        println!("cargo:rustc-env={k}={v}");
    }
}
