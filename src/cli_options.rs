use std::collections::HashMap;

pub struct CliOptions {
    pub scene: u32,
    pub width: u32,
    pub height: u32,
    pub antialias: u32,
    pub jitter: bool,
    pub bounces: u32,
    pub fov_deg: f32,
    pub output: String,
    pub exr_output: Option<String>,
    pub seed: u64,
    pub show_help: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            scene: 0,
            width: 640,
            height: 480,
            antialias: 1,
            jitter: false,
            bounces: 3,
            fov_deg: 40.0,
            output: String::from("output.png"),
            exr_output: None,
            seed: 0,
            show_help: false,
        }
    }
}

impl CliOptions {
    pub fn message() -> &'static str {
        r#"
        --scene <0-4>          preset scene number
        --width <w> --height <h>
        --aa <n>               n x n samples per pixel
        --jitter               randomize samples within their sub-pixel cells
        --bounces <n>          maximum ray depth, primary ray included
        --fov <degrees>        vertical field of view
        --output <file.png>
        --exr <file.exr>       also writes the linear colors
        --seed <n>             seed of the jitter sampler
        "#
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: Option<String>) -> Result<T, String> {
    let value = value.ok_or(format!("Missing value for {}", key))?;
    value
        .parse::<T>()
        .map_err(|_| format!("Invalid value for {}: {}", key, value))
}

pub fn parse_args(args: Vec<String>) -> Result<CliOptions, String> {
    let mut pairs: HashMap<String, Option<String>> = HashMap::new();
    let mut args = args.into_iter().rev().collect::<Vec<_>>();
    args.pop(); // Removes args[0]

    while let Some(key) = args.pop() {
        if !key.starts_with('-') {
            return Err(format!("Unrecognized key {}", key));
        }
        match args.last() {
            None => {
                pairs.insert(key, None);
            }
            Some(value) => {
                if value.starts_with("--") {
                    pairs.insert(key, None);
                } else {
                    let value = args.pop();
                    pairs.insert(key, value);
                }
            }
        }
    }
    let mut options = CliOptions::default();
    for (k, v) in pairs.into_iter() {
        match k.as_str() {
            "--scene" => options.scene = parse_value(&k, v)?,
            "--width" => options.width = parse_value(&k, v)?,
            "--height" => options.height = parse_value(&k, v)?,
            "--aa" => options.antialias = parse_value(&k, v)?,
            "--jitter" => options.jitter = true,
            "--bounces" => options.bounces = parse_value(&k, v)?,
            "--fov" => options.fov_deg = parse_value(&k, v)?,
            "--output" => options.output = parse_value(&k, v)?,
            "--exr" => options.exr_output = Some(parse_value(&k, v)?),
            "--seed" => options.seed = parse_value(&k, v)?,
            "--help" => options.show_help = true,
            _ => return Err(format!("Unrecognized key {}", k)),
        }
    }
    if options.width == 0 || options.height == 0 {
        return Err(format!("Empty film {}x{}", options.width, options.height));
    }
    if options.antialias == 0 {
        return Err(String::from("--aa needs at least 1 sample"));
    }
    Ok(options)
}
