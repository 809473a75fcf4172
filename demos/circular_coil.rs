use coil_fields::prelude::*;

fn main() -> Result<()> {
    // Unit-radius circular coil carrying 1 MA, 129 points.
    let coil = circular_filament(1.0, 129, 1.0e6, "pf1", 1);

    // Field along the coil axis; the analytic loop value is
    // B_z(z) = mu0 I R^2 / (2 (R^2 + z^2)^(3/2)).
    let axis: Vec<R3> = linspace(0.0, 2.0, 9).into_iter().map(|z| R3::new(0.0, 0.0, z)).collect();
    let field = coil.bfield(&axis);

    println!("z(m), Bz(T), Bz_analytic(T)");
    for (q, b) in axis.iter().zip(&field) {
        let analytic = 2.0 * std::f64::consts::PI * MU0_OVER_4PI * 1.0e6
            / (1.0 + q.z * q.z).powf(1.5);
        println!("{:.3e}, {:.6e}, {:.6e}", q.z, b.z, analytic);
    }

    // Round-trip the coil through the MAKEGRID interchange format.
    let set = CoilSet::new(vec![coil]);
    let path = std::env::temp_dir().join("circular_coil.example");
    write_makegrid(&set, &path, 1)?;
    let read_back = read_makegrid(&path)?;
    println!(
        "round-tripped {} coil(s) through {}",
        read_back.len(),
        path.display()
    );
    Ok(())
}
