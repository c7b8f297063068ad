use bonafe_routing::problem::vehicle_type::VehicleType;
use comfy_table::Table;

pub fn run() {
    let mut table = Table::new();
    table.set_header(vec![
        "Id",
        "Name",
        "Toll class",
        "Consumption (km/l)",
        "Weigh stations",
    ]);

    for vehicle_type in VehicleType::catalog() {
        table.add_row(vec![
            vehicle_type.id,
            vehicle_type.name,
            vehicle_type.toll_class.to_string(),
            format!("{:.1}", vehicle_type.fuel_consumption_km_per_litre),
            if vehicle_type.subject_to_weighing {
                String::from("yes")
            } else {
                String::from("no")
            },
        ]);
    }

    println!("{table}");
}
