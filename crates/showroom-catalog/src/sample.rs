// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sample dealership data standing in for a real inventory database.

use crate::business::{BusinessInfo, DayHours};
use crate::financing::FinancingPlan;
use crate::vehicle::{BodyStyle, FuelType, Transmission, Vehicle};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Sample vehicle inventory.
pub(crate) fn sample_inventory() -> Vec<Vehicle> {
    vec![
        Vehicle {
            id: "bmw-x5-2024-001".into(),
            brand: "BMW".into(),
            model: "X5".into(),
            year: 2024,
            price: 65_000,
            color: "Mineral White".into(),
            mileage: 1_200,
            fuel_type: FuelType::Gasoline,
            body_style: BodyStyle::Suv,
            transmission: Transmission::Automatic,
            engine_size: "3.0L I6 Turbo".into(),
            fuel_economy: "21 city / 26 highway mpg".into(),
            combined_mpg: 23,
            features: strings(&[
                "All-wheel drive",
                "Premium package",
                "Navigation system",
                "Leather seats",
                "Panoramic sunroof",
                "Harman Kardon sound system",
                "Apple CarPlay",
                "Lane departure warning",
            ]),
            description: "Luxury SUV with exceptional performance and comfort. Perfect for families who want style and capability.".into(),
            is_available: true,
            location: "Main Lot A-12".into(),
        },
        Vehicle {
            id: "toyota-camry-2023-001".into(),
            brand: "Toyota".into(),
            model: "Camry".into(),
            year: 2023,
            price: 28_500,
            color: "Celestial Silver".into(),
            mileage: 8_500,
            fuel_type: FuelType::Gasoline,
            body_style: BodyStyle::Sedan,
            transmission: Transmission::Automatic,
            engine_size: "2.5L 4-Cylinder".into(),
            fuel_economy: "28 city / 39 highway mpg".into(),
            combined_mpg: 32,
            features: strings(&[
                "Toyota Safety Sense 2.0",
                "Wireless charging",
                "Android Auto",
                "Apple CarPlay",
                "Dual-zone climate control",
                "Backup camera",
                "Blind spot monitoring",
            ]),
            description: "Reliable and fuel-efficient sedan. Perfect for daily commuting with excellent safety ratings.".into(),
            is_available: true,
            location: "Main Lot B-5".into(),
        },
        Vehicle {
            id: "tesla-model3-2024-001".into(),
            brand: "Tesla".into(),
            model: "Model 3".into(),
            year: 2024,
            price: 42_000,
            color: "Pearl White".into(),
            mileage: 500,
            fuel_type: FuelType::Electric,
            body_style: BodyStyle::Sedan,
            transmission: Transmission::Automatic,
            engine_size: "Electric Motor".into(),
            fuel_economy: "134 MPGe combined".into(),
            combined_mpg: 134,
            features: strings(&[
                "Autopilot",
                "Full self-driving capability",
                "15-inch touchscreen",
                "Premium connectivity",
                "Supercharging network access",
                "Over-the-air updates",
                "Glass roof",
            ]),
            description: "All-electric sedan with cutting-edge technology and impressive range. Zero emissions driving.".into(),
            is_available: true,
            location: "Electric Vehicle Section E-1".into(),
        },
        Vehicle {
            id: "ford-f150-2023-001".into(),
            brand: "Ford".into(),
            model: "F-150".into(),
            year: 2023,
            price: 45_000,
            color: "Antimatter Blue".into(),
            mileage: 3_200,
            fuel_type: FuelType::Gasoline,
            body_style: BodyStyle::Pickup,
            transmission: Transmission::Automatic,
            engine_size: "3.5L V6 EcoBoost".into(),
            fuel_economy: "20 city / 24 highway mpg".into(),
            combined_mpg: 22,
            features: strings(&[
                "4WD",
                "Towing package",
                "Bed liner",
                "SYNC 4 infotainment",
                "FordPass Connect",
                "Pro Trailer Backup Assist",
                "Multi-contour front seats",
            ]),
            description: "America's best-selling truck. Built tough for work and play with impressive towing capacity.".into(),
            is_available: true,
            location: "Truck Section T-3".into(),
        },
        Vehicle {
            id: "honda-civic-2024-001".into(),
            brand: "Honda".into(),
            model: "Civic".into(),
            year: 2024,
            price: 24_000,
            color: "Rallye Red".into(),
            mileage: 1_800,
            fuel_type: FuelType::Gasoline,
            body_style: BodyStyle::Hatchback,
            transmission: Transmission::Manual,
            engine_size: "2.0L 4-Cylinder".into(),
            fuel_economy: "31 city / 40 highway mpg".into(),
            combined_mpg: 35,
            features: strings(&[
                "Honda Sensing suite",
                "Apple CarPlay",
                "Android Auto",
                "7-inch touchscreen",
                "Adaptive cruise control",
                "Collision mitigation",
                "Sport mode",
            ]),
            description: "Sporty and efficient compact car. Great for young drivers and city commuting.".into(),
            is_available: true,
            location: "Compact Section C-7".into(),
        },
        Vehicle {
            id: "audi-a4-2023-001".into(),
            brand: "Audi".into(),
            model: "A4".into(),
            year: 2023,
            price: 38_000,
            color: "Glacier White".into(),
            mileage: 5_500,
            fuel_type: FuelType::Gasoline,
            body_style: BodyStyle::Sedan,
            transmission: Transmission::Automatic,
            engine_size: "2.0L Turbo".into(),
            fuel_economy: "24 city / 31 highway mpg".into(),
            combined_mpg: 27,
            features: strings(&[
                "Quattro AWD",
                "Virtual cockpit",
                "MMI infotainment",
                "Premium Plus package",
                "Sunroof",
                "Bang & Olufsen sound",
                "Audi pre sense",
            ]),
            description: "German luxury sedan with sophisticated technology and premium materials.".into(),
            is_available: true,
            location: "Luxury Section L-2".into(),
        },
    ]
}

/// Sample business record.
pub(crate) fn sample_business() -> BusinessInfo {
    let hours = [
        ("Lunes", "9:00 AM - 8:00 PM"),
        ("Martes", "9:00 AM - 8:00 PM"),
        ("Miércoles", "9:00 AM - 8:00 PM"),
        ("Jueves", "9:00 AM - 8:00 PM"),
        ("Viernes", "9:00 AM - 8:00 PM"),
        ("Sábado", "9:00 AM - 6:00 PM"),
        ("Domingo", "12:00 PM - 5:00 PM"),
    ]
    .into_iter()
    .map(|(day, hours)| DayHours {
        day: day.into(),
        hours: hours.into(),
    })
    .collect();

    BusinessInfo {
        name: "AutoMax Concesionario".into(),
        address: "123 Avenida Principal, Ciudad, Estado 12345".into(),
        phone: "(555) 123-4567".into(),
        email: "info@automax.com".into(),
        website: "www.automax.com".into(),
        hours,
        services: strings(&[
            "Venta de autos nuevos",
            "Venta de autos usados",
            "Financiamiento y arrendamiento",
            "Evaluación de vehículos usados",
            "Servicio y mantenimiento",
            "Departamento de refacciones",
            "Garantías extendidas",
            "Servicios de seguro",
        ]),
    }
}

/// Sample financing plans.
pub(crate) fn sample_financing_plans() -> Vec<FinancingPlan> {
    vec![
        FinancingPlan {
            id: "standard-financing".into(),
            name: "Préstamo Automotriz Estándar".into(),
            apr: 4.9,
            term_months: 60,
            description: "Financiamiento automotriz tradicional con tasas competitivas".into(),
            requirements: strings(&[
                "Buen puntaje crediticio (650+)",
                "Comprobante de ingresos",
                "Se recomienda enganche",
            ]),
        },
        FinancingPlan {
            id: "lease-option".into(),
            name: "Programa de Arrendamiento".into(),
            apr: 2.9,
            term_months: 36,
            description: "Pagos mensuales más bajos con opción de arrendamiento".into(),
            requirements: strings(&[
                "Excelente puntaje crediticio (700+)",
                "Aplican restricciones de kilometraje",
            ]),
        },
        FinancingPlan {
            id: "first-time-buyer".into(),
            name: "Programa de Primer Comprador".into(),
            apr: 6.9,
            term_months: 72,
            description: "Programa especial para compradores de primer auto".into(),
            requirements: strings(&[
                "Se acepta historial crediticio limitado",
                "Se requiere mayor enganche",
            ]),
        },
    ]
}
