//! Unit definitions - ~30 quantity kinds with SI-consistent base units
//!
//! Factors convert to the kind's base unit: `value_base = value * factor + offset`.
//! Derived kinds use coherent SI base units (kg/m³, m/s, N, Pa, J, W, ...) so that
//! products and quotients of base values land in the derived kind's base unit.

use std::f64::consts::PI;
use crate::{Dimension, KindDef, UnitDef};

use crate::Culture::{Chinese, Russian};

pub(crate) static LENGTH: KindDef = KindDef {
    description: "Distance between two points",
    dimension: Dimension::LENGTH,
    base: 0,
    derivable: true,
    units: &[
        UnitDef::linear("Meter", &["m"], 1.0)
            .localized(&[(Russian, &["м"]), (Chinese, &["米"])]),
        UnitDef::linear("Kilometer", &["km"], 1e3)
            .localized(&[(Russian, &["км"]), (Chinese, &["千米"])]),
        UnitDef::linear("Centimeter", &["cm"], 1e-2)
            .localized(&[(Russian, &["см"]), (Chinese, &["厘米"])]),
        UnitDef::linear("Millimeter", &["mm"], 1e-3)
            .localized(&[(Russian, &["мм"]), (Chinese, &["毫米"])]),
        UnitDef::linear("Micrometer", &["µm", "um"], 1e-6),
        UnitDef::linear("Nanometer", &["nm"], 1e-9),
        UnitDef::linear("Inch", &["in", "″"], 0.0254),
        UnitDef::linear("Foot", &["ft", "′"], 0.3048),
        UnitDef::linear("Yard", &["yd"], 0.9144),
        UnitDef::linear("Mile", &["mi"], 1609.344),
        UnitDef::linear("NauticalMile", &["NM", "nmi"], 1852.0),
        UnitDef::linear("AstronomicalUnit", &["au", "ua"], 149_597_870_700.0),
        UnitDef::linear("LightYear", &["ly"], 9_460_730_472_580_800.0),
        UnitDef::linear("Parsec", &["pc"], 3.085_677_581_491_367_3e16),
    ],
};

pub(crate) static MASS: KindDef = KindDef {
    description: "Amount of matter in a body",
    dimension: Dimension::MASS,
    base: 0,
    derivable: true,
    units: &[
        UnitDef::linear("Kilogram", &["kg"], 1.0)
            .localized(&[(Russian, &["кг"]), (Chinese, &["千克"])]),
        UnitDef::linear("Gram", &["g"], 1e-3)
            .localized(&[(Russian, &["г"]), (Chinese, &["克"])]),
        UnitDef::linear("Milligram", &["mg"], 1e-6)
            .localized(&[(Russian, &["мг"]), (Chinese, &["毫克"])]),
        UnitDef::linear("Microgram", &["µg", "ug"], 1e-9),
        UnitDef::linear("Tonne", &["t"], 1e3)
            .localized(&[(Russian, &["т"]), (Chinese, &["吨"])]),
        UnitDef::linear("Pound", &["lb", "lbs", "lbm"], 0.453_592_37)
            .localized(&[(Russian, &["фунт"])]),
        UnitDef::linear("Ounce", &["oz"], 0.028_349_523_125),
        UnitDef::linear("Stone", &["st"], 6.350_293_18),
        UnitDef::linear("ShortTon", &["t (short)", "short tn", "ST"], 907.184_74),
        UnitDef::linear("LongTon", &["long tn"], 1_016.046_908_8),
        UnitDef::linear("Grain", &["gr"], 6.479_891e-5),
    ],
};

pub(crate) static DURATION: KindDef = KindDef {
    description: "Elapsed time",
    dimension: Dimension::TIME,
    base: 3,
    derivable: true,
    units: &[
        UnitDef::linear("Nanosecond", &["ns"], 1e-9),
        UnitDef::linear("Microsecond", &["µs", "us"], 1e-6),
        UnitDef::linear("Millisecond", &["ms"], 1e-3)
            .localized(&[(Russian, &["мс"]), (Chinese, &["毫秒"])]),
        UnitDef::linear("Second", &["s", "sec", "secs", "second", "seconds"], 1.0)
            .localized(&[(Russian, &["с"]), (Chinese, &["秒"])]),
        UnitDef::linear("Minute", &["m", "min", "minute", "minutes"], 60.0)
            .localized(&[(Russian, &["мин"]), (Chinese, &["分钟"])]),
        UnitDef::linear("Hour", &["h", "hr", "hrs", "hour", "hours"], 3_600.0)
            .localized(&[(Russian, &["ч"]), (Chinese, &["小时"])]),
        UnitDef::linear("Day", &["d", "day", "days"], 86_400.0)
            .localized(&[(Russian, &["сут", "д"]), (Chinese, &["天"])]),
        UnitDef::linear("Week", &["wk", "week", "weeks"], 604_800.0),
        UnitDef::linear("Month30", &["mo", "month", "months"], 2_592_000.0),
        UnitDef::linear("Year365", &["yr", "year", "years"], 31_536_000.0),
    ],
};

pub(crate) static TEMPERATURE: KindDef = KindDef {
    description: "Thermodynamic temperature",
    dimension: Dimension::TEMPERATURE,
    base: 0,
    derivable: true,
    units: &[
        UnitDef::linear("Kelvin", &["K"], 1.0),
        UnitDef::affine("DegreeCelsius", &["°C"], 1.0, 273.15),
        UnitDef::affine("DegreeFahrenheit", &["°F"], 5.0 / 9.0, 273.15 - 32.0 * 5.0 / 9.0),
        UnitDef::linear("DegreeRankine", &["°R"], 5.0 / 9.0),
        UnitDef::affine("MillidegreeCelsius", &["m°C"], 1e-3, 273.15),
    ],
};

pub(crate) static ELECTRIC_CURRENT: KindDef = KindDef {
    description: "Flow of electric charge",
    dimension: Dimension::CURRENT,
    base: 0,
    derivable: true,
    units: &[
        UnitDef::linear("Ampere", &["A"], 1.0),
        UnitDef::linear("Milliampere", &["mA"], 1e-3),
        UnitDef::linear("Microampere", &["µA"], 1e-6),
        UnitDef::linear("Kiloampere", &["kA"], 1e3),
    ],
};

pub(crate) static AMOUNT_OF_SUBSTANCE: KindDef = KindDef {
    description: "Number of elementary entities",
    dimension: Dimension::AMOUNT,
    base: 0,
    derivable: true,
    units: &[
        UnitDef::linear("Mole", &["mol"], 1.0),
        UnitDef::linear("Millimole", &["mmol"], 1e-3),
        UnitDef::linear("Kilomole", &["kmol"], 1e3),
        UnitDef::linear("PoundMole", &["lbmol"], 453.592_37),
    ],
};

pub(crate) static LUMINOUS_INTENSITY: KindDef = KindDef {
    description: "Luminous power per unit solid angle",
    dimension: Dimension::LUMINOSITY,
    base: 0,
    derivable: true,
    units: &[UnitDef::linear("Candela", &["cd"], 1.0)],
};

pub(crate) static AREA: KindDef = KindDef {
    description: "Extent of a two-dimensional surface",
    dimension: Dimension::AREA,
    base: 0,
    derivable: true,
    units: &[
        UnitDef::linear("SquareMeter", &["m²"], 1.0)
            .localized(&[(Russian, &["м²"]), (Chinese, &["平方米"])]),
        UnitDef::linear("SquareKilometer", &["km²"], 1e6),
        UnitDef::linear("SquareCentimeter", &["cm²"], 1e-4),
        UnitDef::linear("SquareMillimeter", &["mm²"], 1e-6),
        UnitDef::linear("Hectare", &["ha"], 1e4),
        UnitDef::linear("Acre", &["ac"], 4_046.856_422_4),
        UnitDef::linear("SquareFoot", &["ft²"], 0.092_903_04),
        UnitDef::linear("SquareInch", &["in²"], 6.4516e-4),
        UnitDef::linear("SquareYard", &["yd²"], 0.836_127_36),
        UnitDef::linear("SquareMile", &["mi²"], 2_589_988.110_336),
    ],
};

pub(crate) static VOLUME: KindDef = KindDef {
    description: "Three-dimensional space occupied",
    dimension: Dimension::VOLUME,
    base: 0,
    derivable: true,
    units: &[
        UnitDef::linear("CubicMeter", &["m³"], 1.0)
            .localized(&[(Russian, &["м³"]), (Chinese, &["立方米"])]),
        UnitDef::linear("Liter", &["l", "L"], 1e-3)
            .localized(&[(Russian, &["л"]), (Chinese, &["升"])]),
        UnitDef::linear("Milliliter", &["ml", "mL"], 1e-6)
            .localized(&[(Russian, &["мл"]), (Chinese, &["毫升"])]),
        UnitDef::linear("Centiliter", &["cl"], 1e-5),
        UnitDef::linear("Deciliter", &["dl"], 1e-4),
        UnitDef::linear("CubicCentimeter", &["cm³"], 1e-6),
        UnitDef::linear("CubicFoot", &["ft³"], 0.028_316_846_592),
        UnitDef::linear("CubicInch", &["in³"], 1.638_706_4e-5),
        UnitDef::linear("UsGallon", &["gal (U.S.)"], 0.003_785_411_784),
        UnitDef::linear("ImperialGallon", &["gal (imp.)"], 0.004_546_09),
        UnitDef::linear("UsOunce", &["oz (U.S.)"], 2.957_352_956_25e-5),
        UnitDef::linear("UsTeaspoon", &["tsp"], 4.928_921_593_75e-6),
        UnitDef::linear("UsTablespoon", &["Tbs"], 1.478_676_478_125e-5),
    ],
};

pub(crate) static DENSITY: KindDef = KindDef {
    description: "Mass per unit volume",
    dimension: Dimension::DENSITY,
    base: 0,
    derivable: true,
    units: &[
        UnitDef::linear("KilogramPerCubicMeter", &["kg/m³"], 1.0),
        UnitDef::linear("GramPerCubicCentimeter", &["g/cm³"], 1e3),
        UnitDef::linear("GramPerMilliliter", &["g/ml"], 1e3),
        UnitDef::linear("GramPerLiter", &["g/l", "g/L"], 1.0),
        UnitDef::linear("KilogramPerLiter", &["kg/l"], 1e3),
        UnitDef::linear("MilligramPerLiter", &["mg/l", "mg/L"], 1e-3),
        UnitDef::linear("PoundPerCubicFoot", &["lb/ft³"], 16.018_463_373_960_14),
    ],
};

pub(crate) static SPEED: KindDef = KindDef {
    description: "Distance travelled per unit time",
    dimension: Dimension::VELOCITY,
    base: 0,
    derivable: true,
    units: &[
        UnitDef::linear("MeterPerSecond", &["m/s"], 1.0),
        UnitDef::linear("KilometerPerHour", &["km/h"], 1.0 / 3.6)
            .localized(&[(Russian, &["км/ч"])]),
        UnitDef::linear("MilePerHour", &["mph"], 0.447_04),
        UnitDef::linear("Knot", &["kn", "kt", "knot", "knots"], 1852.0 / 3600.0),
        UnitDef::linear("FootPerSecond", &["ft/s"], 0.3048),
        UnitDef::linear("CentimeterPerSecond", &["cm/s"], 1e-2),
    ],
};

pub(crate) static ACCELERATION: KindDef = KindDef {
    description: "Rate of change of velocity",
    dimension: Dimension::ACCELERATION,
    base: 0,
    derivable: true,
    units: &[
        UnitDef::linear("MeterPerSecondSquared", &["m/s²"], 1.0),
        UnitDef::linear("StandardGravity", &["g"], 9.806_65),
        UnitDef::linear("FootPerSecondSquared", &["ft/s²"], 0.3048),
        UnitDef::linear("CentimeterPerSecondSquared", &["cm/s²"], 1e-2),
    ],
};

pub(crate) static FORCE: KindDef = KindDef {
    description: "Interaction that changes the motion of a body",
    dimension: Dimension::FORCE,
    base: 0,
    derivable: true,
    units: &[
        UnitDef::linear("Newton", &["N"], 1.0),
        UnitDef::linear("Kilonewton", &["kN"], 1e3),
        UnitDef::linear("Meganewton", &["MN"], 1e6),
        UnitDef::linear("PoundForce", &["lbf"], 4.448_221_615_260_5),
        UnitDef::linear("KilogramForce", &["kgf"], 9.806_65),
        UnitDef::linear("Dyne", &["dyn"], 1e-5),
    ],
};

pub(crate) static PRESSURE: KindDef = KindDef {
    description: "Force applied per unit area",
    dimension: Dimension::PRESSURE,
    base: 0,
    derivable: true,
    units: &[
        UnitDef::linear("Pascal", &["Pa"], 1.0),
        UnitDef::linear("Kilopascal", &["kPa"], 1e3),
        UnitDef::linear("Megapascal", &["MPa"], 1e6),
        UnitDef::linear("Hectopascal", &["hPa"], 1e2),
        UnitDef::linear("Bar", &["bar"], 1e5),
        UnitDef::linear("Millibar", &["mbar"], 1e2),
        UnitDef::linear("Atmosphere", &["atm"], 101_325.0),
        UnitDef::linear("PoundForcePerSquareInch", &["psi", "lb/in²"], 6_894.757_293_168_361),
        UnitDef::linear("MillimeterOfMercury", &["mmHg"], 133.322_387_415),
        UnitDef::linear("InchOfMercury", &["inHg"], 3_386.388_640_341),
        UnitDef::linear("Torr", &["torr"], 101_325.0 / 760.0),
    ],
};

pub(crate) static ENERGY: KindDef = KindDef {
    description: "Capacity to do work",
    dimension: Dimension::ENERGY,
    base: 0,
    derivable: true,
    units: &[
        UnitDef::linear("Joule", &["J"], 1.0),
        UnitDef::linear("Kilojoule", &["kJ"], 1e3),
        UnitDef::linear("Megajoule", &["MJ"], 1e6),
        UnitDef::linear("Calorie", &["cal"], 4.184),
        UnitDef::linear("Kilocalorie", &["kcal"], 4_184.0),
        UnitDef::linear("WattHour", &["Wh"], 3_600.0),
        UnitDef::linear("KilowattHour", &["kWh"], 3.6e6),
        UnitDef::linear("BritishThermalUnit", &["BTU"], 1_055.055_852_62),
        UnitDef::linear("Electronvolt", &["eV"], 1.602_176_634e-19),
        UnitDef::linear("Erg", &["erg"], 1e-7),
        UnitDef::linear("FootPound", &["ft·lb"], 1.355_817_948_331_400_4),
    ],
};

pub(crate) static POWER: KindDef = KindDef {
    description: "Energy transferred per unit time",
    dimension: Dimension::POWER,
    base: 0,
    derivable: true,
    units: &[
        UnitDef::linear("Watt", &["W"], 1.0),
        UnitDef::linear("Milliwatt", &["mW"], 1e-3),
        UnitDef::linear("Kilowatt", &["kW"], 1e3),
        UnitDef::linear("Megawatt", &["MW"], 1e6),
        UnitDef::linear("Gigawatt", &["GW"], 1e9),
        UnitDef::linear("MechanicalHorsepower", &["hp(I)"], 745.699_871_582_270_2),
        UnitDef::linear("MetricHorsepower", &["hp(M)"], 735.498_75),
        UnitDef::linear("BritishThermalUnitPerHour", &["Btu/h"], 0.293_071_070_17),
    ],
};

pub(crate) static FREQUENCY: KindDef = KindDef {
    description: "Occurrences per unit time",
    dimension: Dimension::FREQUENCY,
    base: 0,
    derivable: true,
    units: &[
        UnitDef::linear("Hertz", &["Hz"], 1.0),
        UnitDef::linear("Kilohertz", &["kHz"], 1e3),
        UnitDef::linear("Megahertz", &["MHz"], 1e6),
        UnitDef::linear("Gigahertz", &["GHz"], 1e9),
        UnitDef::linear("PerSecond", &["s⁻¹"], 1.0),
        UnitDef::linear("CyclePerMinute", &["cpm"], 1.0 / 60.0),
        UnitDef::linear("BeatPerMinute", &["bpm"], 1.0 / 60.0),
    ],
};

pub(crate) static ROTATIONAL_SPEED: KindDef = KindDef {
    description: "Angle turned per unit time",
    dimension: Dimension::FREQUENCY,
    base: 0,
    derivable: false,
    units: &[
        UnitDef::linear("RadianPerSecond", &["rad/s"], 1.0),
        UnitDef::linear("RevolutionPerMinute", &["rpm", "r/min"], 2.0 * PI / 60.0),
        UnitDef::linear("RevolutionPerSecond", &["r/s"], 2.0 * PI),
        UnitDef::linear("DegreePerSecond", &["°/s", "deg/s"], PI / 180.0),
    ],
};

pub(crate) static ANGLE: KindDef = KindDef {
    description: "Figure formed by two rays",
    dimension: Dimension::DIMENSIONLESS,
    base: 0,
    derivable: false,
    units: &[
        UnitDef::linear("Radian", &["rad"], 1.0),
        UnitDef::linear("Degree", &["°", "deg"], PI / 180.0),
        UnitDef::linear("Gradian", &["g"], PI / 200.0),
        UnitDef::linear("Arcminute", &["'", "arcmin", "amin", "min"], PI / 10_800.0),
        UnitDef::linear("Arcsecond", &["″", "arcsec", "asec", "sec"], PI / 648_000.0),
        UnitDef::linear("Revolution", &["r"], 2.0 * PI),
        UnitDef::linear("Milliradian", &["mrad"], 1e-3),
    ],
};

pub(crate) static INFORMATION: KindDef = KindDef {
    description: "Amount of digital information",
    dimension: Dimension::DIMENSIONLESS,
    base: 0,
    derivable: false,
    units: &[
        UnitDef::linear("Bit", &["b"], 1.0),
        UnitDef::linear("Byte", &["B"], 8.0),
        UnitDef::linear("Kilobit", &["kb"], 1e3),
        UnitDef::linear("Megabit", &["Mb"], 1e6),
        UnitDef::linear("Kilobyte", &["KB"], 8e3),
        UnitDef::linear("Megabyte", &["MB"], 8e6),
        UnitDef::linear("Gigabyte", &["GB"], 8e9),
        UnitDef::linear("Terabyte", &["TB"], 8e12),
        UnitDef::linear("Kibibyte", &["KiB"], 8_192.0),
        UnitDef::linear("Mebibyte", &["MiB"], 8_388_608.0),
        UnitDef::linear("Gibibyte", &["GiB"], 8_589_934_592.0),
    ],
};

pub(crate) static ELECTRIC_POTENTIAL: KindDef = KindDef {
    description: "Work per unit charge",
    dimension: Dimension::VOLTAGE,
    base: 0,
    derivable: true,
    units: &[
        UnitDef::linear("Volt", &["V"], 1.0),
        UnitDef::linear("Millivolt", &["mV"], 1e-3),
        UnitDef::linear("Microvolt", &["µV"], 1e-6),
        UnitDef::linear("Kilovolt", &["kV"], 1e3),
        UnitDef::linear("Megavolt", &["MV"], 1e6),
    ],
};

pub(crate) static ELECTRIC_RESISTANCE: KindDef = KindDef {
    description: "Opposition to electric current",
    dimension: Dimension::RESISTANCE,
    base: 0,
    derivable: true,
    units: &[
        UnitDef::linear("Ohm", &["Ω"], 1.0),
        UnitDef::linear("Milliohm", &["mΩ"], 1e-3),
        UnitDef::linear("Kiloohm", &["kΩ"], 1e3),
        UnitDef::linear("Megaohm", &["MΩ"], 1e6),
    ],
};

pub(crate) static ELECTRIC_CHARGE: KindDef = KindDef {
    description: "Quantity of electricity",
    dimension: Dimension::CHARGE,
    base: 0,
    derivable: true,
    units: &[
        UnitDef::linear("Coulomb", &["C"], 1.0),
        UnitDef::linear("AmpereHour", &["A-h", "Ah"], 3_600.0),
        UnitDef::linear("MilliampereHour", &["mAh"], 3.6),
    ],
};

pub(crate) static CAPACITANCE: KindDef = KindDef {
    description: "Ability to store electric charge",
    dimension: Dimension::CAPACITANCE,
    base: 0,
    derivable: true,
    units: &[
        UnitDef::linear("Farad", &["F"], 1.0),
        UnitDef::linear("Millifarad", &["mF"], 1e-3),
        UnitDef::linear("Microfarad", &["µF"], 1e-6),
        UnitDef::linear("Nanofarad", &["nF"], 1e-9),
        UnitDef::linear("Picofarad", &["pF"], 1e-12),
    ],
};

pub(crate) static TORQUE: KindDef = KindDef {
    description: "Rotational equivalent of force",
    dimension: Dimension::ENERGY,
    base: 0,
    derivable: false,
    units: &[
        UnitDef::linear("NewtonMeter", &["N·m"], 1.0),
        UnitDef::linear("KilonewtonMeter", &["kN·m"], 1e3),
        UnitDef::linear("NewtonCentimeter", &["N·cm"], 1e-2),
        UnitDef::linear("PoundForceFoot", &["lbf·ft"], 1.355_817_948_331_400_4),
    ],
};

pub(crate) static VOLUME_FLOW: KindDef = KindDef {
    description: "Volume passing per unit time",
    dimension: Dimension::VOLUME_FLOW,
    base: 0,
    derivable: true,
    units: &[
        UnitDef::linear("CubicMeterPerSecond", &["m³/s"], 1.0),
        UnitDef::linear("CubicMeterPerHour", &["m³/h"], 1.0 / 3_600.0),
        UnitDef::linear("LiterPerSecond", &["l/s", "L/s"], 1e-3),
        UnitDef::linear("LiterPerMinute", &["l/min", "L/min"], 1e-3 / 60.0),
        UnitDef::linear("UsGallonPerMinute", &["gal (U.S.)/min", "GPM"], 0.003_785_411_784 / 60.0),
        UnitDef::linear("CubicFootPerSecond", &["ft³/s"], 0.028_316_846_592),
    ],
};

pub(crate) static MASS_FLOW: KindDef = KindDef {
    description: "Mass passing per unit time",
    dimension: Dimension::MASS_FLOW,
    base: 0,
    derivable: true,
    units: &[
        UnitDef::linear("KilogramPerSecond", &["kg/s"], 1.0),
        UnitDef::linear("GramPerSecond", &["g/s"], 1e-3),
        UnitDef::linear("KilogramPerHour", &["kg/h"], 1.0 / 3_600.0),
        UnitDef::linear("TonnePerHour", &["t/h"], 1e3 / 3_600.0),
        UnitDef::linear("PoundPerHour", &["lb/h"], 0.453_592_37 / 3_600.0),
    ],
};

pub(crate) static RATIO: KindDef = KindDef {
    description: "Relation between two quantities of the same kind",
    dimension: Dimension::DIMENSIONLESS,
    base: 0,
    derivable: true,
    units: &[
        UnitDef::linear("DecimalFraction", &["frac"], 1.0),
        UnitDef::linear("Percent", &["%"], 1e-2),
        UnitDef::linear("PartPerThousand", &["‰"], 1e-3),
        UnitDef::linear("PartPerMillion", &["ppm"], 1e-6),
        UnitDef::linear("PartPerBillion", &["ppb"], 1e-9),
    ],
};

pub(crate) static ILLUMINANCE: KindDef = KindDef {
    description: "Luminous flux incident per unit area",
    dimension: Dimension::ILLUMINANCE,
    base: 0,
    derivable: true,
    units: &[
        UnitDef::linear("Lux", &["lx"], 1.0),
        UnitDef::linear("Millilux", &["mlx"], 1e-3),
        UnitDef::linear("Kilolux", &["klx"], 1e3),
        UnitDef::linear("Megalux", &["Mlx"], 1e6),
    ],
};

pub(crate) static MOLARITY: KindDef = KindDef {
    description: "Amount of substance per unit volume",
    dimension: Dimension::MOLARITY,
    base: 0,
    derivable: true,
    units: &[
        UnitDef::linear("MolePerCubicMeter", &["mol/m³"], 1.0),
        UnitDef::linear("MolePerLiter", &["mol/l", "mol/L", "M"], 1e3),
        UnitDef::linear("MillimolePerLiter", &["mmol/l", "mmol/L", "mM"], 1.0),
    ],
};
