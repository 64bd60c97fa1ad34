use console::Style;
use platebatch_core::job::config::JobConfig;
use platebatch_core::metadata::Vendor;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    vendor: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            vendor: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_job_summary(config: &JobConfig, vendor: Vendor) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Plate Batch Job"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(15)));
    println!();

    // Sources
    println!("  {}", s.header.apply_to("Plates"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Microscope"),
        s.vendor.apply_to(vendor)
    );
    match config.experiment {
        Some(ref experiment) => println!(
            "    {:<12}{}",
            s.label.apply_to("Experiment"),
            s.path.apply_to(experiment.display())
        ),
        None => println!(
            "    {:<12}{}",
            s.label.apply_to("Experiment"),
            s.disabled.apply_to("none")
        ),
    }
    for add in &config.add_plates {
        println!(
            "    {:<12}{} from {}",
            s.label.apply_to("Add"),
            s.value.apply_to(add.plates.join(", ")),
            s.path.apply_to(add.experiment.display())
        );
    }
    if !config.remove_plates.is_empty() {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Remove"),
            s.value.apply_to(config.remove_plates.join(", "))
        );
    }
    println!();

    // Batching
    println!("  {}", s.header.apply_to("Batching"));
    match config.chunk {
        Some(size) => println!(
            "    {:<12}{}",
            s.label.apply_to("Job size"),
            s.value.apply_to(format!("{size} imagesets"))
        ),
        None => println!(
            "    {:<12}{}",
            s.label.apply_to("Job size"),
            s.disabled.apply_to("one job per plate")
        ),
    }
    if config.channels.is_empty() {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Channels"),
            s.disabled.apply_to("default names")
        );
    } else {
        for (channel, label) in &config.channels {
            println!(
                "    {:<12}{}",
                s.label.apply_to(format!("Channel {channel}")),
                s.value.apply_to(label)
            );
        }
    }
    println!();

    // Outputs
    println!("  {}", s.header.apply_to("Output"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Pipeline"),
        s.path.apply_to(config.pipeline.display())
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Location"),
        s.path.apply_to(config.location.display())
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Commands"),
        s.path.apply_to(config.commands_location.display())
    );
    println!();
}
