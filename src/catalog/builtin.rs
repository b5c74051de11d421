//! Bundled IBS-friendly recipe set.

use super::RecipeSpec;
use crate::types::MealSlot::{Breakfast, Dinner, Lunch};
use crate::types::Protein::{Beef, Chicken, Eggs, Fish, Mixed, None as NoProtein, Pork, Tofu, Turkey};
use crate::types::Tag::{
    DairyFree as DF, GlutenFree as GF, LowFodmap as LF, Quick as Q, SpicyFree as SF,
    Vegetarian as VEG,
};

const SQUASH_BASE: &str = "Crema de calabaza base (batch)";
const QUINOA_BASE: &str = "Quinoa cocida base (batch)";
const CHICKEN_BASE: &str = "Pollo asado simple (batch)";

pub(super) fn recipe_specs() -> Vec<RecipeSpec> {
    let mut specs = breakfasts();
    specs.extend(batch_recipes());
    specs.extend(mains());
    specs
}

fn breakfasts() -> Vec<RecipeSpec> {
    vec![
        RecipeSpec::new("Overnight oats de avena sin gluten con leche sin lactosa y fresas", Breakfast, &[LF, GF, DF, Q], NoProtein)
            .notes("Usar avena certificada GF y leche sin lactosa."),
        RecipeSpec::new("Yogur sin lactosa con kiwi (ración baja FODMAP) y semillas", Breakfast, &[LF, GF, Q], NoProtein),
        RecipeSpec::new("Huevos revueltos con espinacas y tomate cherry (ración baja)", Breakfast, &[LF, GF, DF, Q], Eggs),
        RecipeSpec::new("Tostadas de pan sin gluten con aceite de oliva y pavo", Breakfast, &[LF, GF, DF, Q], Turkey),
        RecipeSpec::new("Chía pudding con bebida vegetal sin FODMAP añadidos", Breakfast, &[LF, GF, DF], NoProtein),
        RecipeSpec::new("Tortitas de arroz con crema de cacahuete y plátano (1/2)", Breakfast, &[LF, GF, DF, Q], NoProtein),
        RecipeSpec::new("Avena cocida sin gluten con canela y arándanos", Breakfast, &[LF, GF], NoProtein),
        RecipeSpec::new("Omelette francesa con queso curado sin lactosa", Breakfast, &[LF, GF, Q], Eggs),
        RecipeSpec::new("Batido suave: fresas + yogur sin lactosa + agua", Breakfast, &[LF, GF, Q], NoProtein),
        RecipeSpec::new("Gachas de maíz (polenta dulce) con canela", Breakfast, &[LF, GF, DF], NoProtein),
        RecipeSpec::new("Tortilla de patata fina (al horno)", Breakfast, &[LF, GF, DF], Eggs),
        RecipeSpec::new("Arepa de maíz con queso sin lactosa", Breakfast, &[LF, GF], NoProtein),
        RecipeSpec::new("Pan sin gluten con mermelada sin fructosa añadida", Breakfast, &[LF, GF, Q], NoProtein),
        RecipeSpec::new("Fruta baja FODMAP (fresas/kiwi) + puñado de nueces", Breakfast, &[LF, GF, DF, Q], NoProtein),
        RecipeSpec::new("Huevos duros con aceite de oliva y pimienta", Breakfast, &[LF, GF, DF, Q], Eggs),
        RecipeSpec::new("Tortitas de avena GF y huevo (2-3) con sirope de arce", Breakfast, &[LF, GF], Eggs),
        RecipeSpec::new("Porridge de quinoa con leche sin lactosa", Breakfast, &[LF, GF], NoProtein),
        RecipeSpec::new("Requesón sin lactosa con uvas (ración baja)", Breakfast, &[LF, GF, Q], NoProtein),
        RecipeSpec::new("Arepa de maíz con aguacate (30 g) y lima", Breakfast, &[LF, GF, DF], NoProtein)
            .notes("Controlar ración de aguacate."),
        RecipeSpec::new("Pan sin gluten con tortilla francesa y espinacas", Breakfast, &[LF, GF], Eggs),
        RecipeSpec::new("Yuca cocida con aceite de oliva y sal", Breakfast, &[LF, GF, DF], NoProtein),
        RecipeSpec::new("Tapioca/Beiju con queso sin lactosa", Breakfast, &[LF, GF], NoProtein),
    ]
}

fn batch_recipes() -> Vec<RecipeSpec> {
    vec![
        RecipeSpec::new(SQUASH_BASE, Dinner, &[LF, GF, DF, SF], NoProtein)
            .batch_base()
            .notes("Rinde 4 porciones. Usar parte como base para dos cenas y una comida."),
        RecipeSpec::new(QUINOA_BASE, Lunch, &[LF, GF, DF, SF, VEG], NoProtein)
            .batch_base()
            .notes("Rinde 6 tazas cocidas para varias comidas."),
        RecipeSpec::new(CHICKEN_BASE, Dinner, &[LF, GF, DF, SF], Chicken)
            .batch_base()
            .notes("Rinde para 2 cenas + 1 comida."),
        RecipeSpec::new("Crema de calabaza + topping de pollo", Dinner, &[LF, GF, SF], Chicken)
            .uses(SQUASH_BASE, "Usar 1 porción de base + pollo desmenuzado.")
            .family("sin picante", "añadir croutons comunes si toleran gluten"),
        RecipeSpec::new("Crema de calabaza + huevo poché", Dinner, &[LF, GF, SF], Eggs)
            .uses(SQUASH_BASE, "Usar 1 porción base + 1 huevo/px."),
        RecipeSpec::new("Bowl de quinoa con salmón y pepino", Lunch, &[LF, GF, DF, SF], Fish)
            .uses(QUINOA_BASE, "Usar 1 taza de quinoa base."),
        RecipeSpec::new("Bowl de quinoa con tofu y zanahoria", Lunch, &[LF, GF, DF, VEG, SF], Tofu)
            .uses(QUINOA_BASE, "Usar 1 taza de quinoa base."),
        RecipeSpec::new("Ensalada templada de pollo asado y calabacín", Lunch, &[LF, GF, DF, SF], Chicken)
            .uses(CHICKEN_BASE, "Usar pechuga de pollo asado."),
    ]
}

fn mains() -> Vec<RecipeSpec> {
    vec![
        RecipeSpec::new("Merluza al horno con patata y zanahoria", Dinner, &[LF, GF, DF, SF, Q], Fish)
            .family("sin ajo", "añadir alioli a parte"),
        RecipeSpec::new("Arroz blanco con tortillas de maíz y pollo salteado", Lunch, &[LF, GF, DF], Chicken),
        RecipeSpec::new("Pechuga de pavo a la plancha con calabacín", Dinner, &[LF, GF, DF, Q], Turkey),
        RecipeSpec::new("Pasta sin gluten con pesto sin ajo", Dinner, &[LF, GF, Q, VEG], NoProtein)
            .family("pesto sin ajo", "pesto normal para familia"),
        RecipeSpec::new("Ensalada de arroz con atún, aceitunas y huevo", Lunch, &[LF, GF, SF], Fish),
        RecipeSpec::new("Tacos de maíz con carne magra y lechuga", Dinner, &[LF, GF, DF], Beef)
            .family("sin picante", "añadir salsa picante aparte"),
        RecipeSpec::new("Sartén de patata, zanahoria y huevos", Dinner, &[LF, GF, DF, VEG], Eggs),
        RecipeSpec::new("Salmón a la plancha con arroz y pepino", Dinner, &[LF, GF, DF, SF, Q], Fish),
        RecipeSpec::new("Pechuga de pollo al limón con quinoa", Lunch, &[LF, GF, DF, SF], Chicken),
        RecipeSpec::new("Arroz frito suave con huevo y zanahoria", Lunch, &[LF, GF, DF, Q, VEG], Eggs),
        RecipeSpec::new("Lomo de cerdo con puré de patata", Dinner, &[LF, GF, SF], Pork),
        RecipeSpec::new("Tofu a la plancha con arroz y calabacín", Lunch, &[LF, GF, DF, VEG], Tofu),
        RecipeSpec::new("Tortilla de maíz con queso sin lactosa y tomate", Lunch, &[LF, GF], NoProtein)
            .family("sin ajo", "añadir pico de gallo a parte"),
        RecipeSpec::new("Arroz con pavo y zanahoria", Dinner, &[LF, GF, DF], Turkey),
        RecipeSpec::new("Fideos de arroz con verduras permitidas", Dinner, &[LF, GF, DF, VEG], NoProtein),
        RecipeSpec::new("Hamburguesa casera (sin pan) con patata al horno", Dinner, &[LF, GF, DF], Beef),
        RecipeSpec::new("Ensalada de pepino, aceitunas, queso sin lactosa", Lunch, &[LF, GF], NoProtein),
        RecipeSpec::new("Poke bowl low-FODMAP con salmón", Lunch, &[LF, GF, DF], Fish),
        RecipeSpec::new("Crepes sin gluten rellenos de pavo y queso sin lactosa", Lunch, &[LF, GF], Turkey),
        RecipeSpec::new("Pechuga de pollo al horno con zanahoria y calabaza", Dinner, &[LF, GF, DF, SF], Chicken),
        RecipeSpec::new("Ternera guisada suave (sin ajo/cebolla) con arroz", Dinner, &[LF, GF, DF, SF], Beef),
        RecipeSpec::new("Gnocchi de patata (GF) con salsa de tomate suave", Dinner, &[LF, GF, VEG], NoProtein)
            .family("salsa suave sin ajo", "salsa normal aparte"),
        RecipeSpec::new("Albóndigas de pavo con arroz", Dinner, &[LF, GF], Turkey),
        RecipeSpec::new("Berenjena asada con queso sin lactosa", Dinner, &[LF, GF, VEG], NoProtein),
        RecipeSpec::new("Tortilla de patata con ensalada", Lunch, &[LF, GF, VEG], Eggs),
        RecipeSpec::new("Arroz con atún y huevo", Lunch, &[LF, GF], Fish),
        RecipeSpec::new("Pescado blanco en papillote con limón", Dinner, &[LF, GF, DF, SF, Q], Fish),
        RecipeSpec::new("Pechuga de pollo salteada con calabacín", Lunch, &[LF, GF, DF, Q], Chicken),
        RecipeSpec::new("Quinoa con zanahoria y huevo", Lunch, &[LF, GF, VEG], Eggs),
        RecipeSpec::new("Arroz con gambas (ración baja)", Dinner, &[LF, GF, DF], Mixed),
        RecipeSpec::new("Pasta GF con atún y aceitunas", Dinner, &[LF, GF, Q], Fish),
        RecipeSpec::new("Crema de zanahoria sin lácteos", Dinner, &[LF, GF, DF, VEG], NoProtein),
        RecipeSpec::new("Tortitas de maíz con pollo desmenuzado", Lunch, &[LF, GF, DF], Chicken),
        RecipeSpec::new("Ensalada templada de quinoa y verduras", Lunch, &[LF, GF, VEG], NoProtein),
        RecipeSpec::new("Lasaña GF de calabacín y pavo", Dinner, &[LF, GF], Turkey),
        RecipeSpec::new("Pechuga de pavo al curry suave (sin picante)", Dinner, &[LF, GF, SF], Turkey),
        RecipeSpec::new("Sopa de pollo con fideos de arroz", Dinner, &[LF, GF, SF], Chicken),
        RecipeSpec::new("Arroz con tofu marinado suave", Lunch, &[LF, GF, VEG], Tofu),
        RecipeSpec::new("Patata asada con atún y mayonesa sin lactosa", Lunch, &[LF, GF], Fish),
        RecipeSpec::new("Arroz caldoso suave con pavo", Dinner, &[LF, GF], Turkey),
        RecipeSpec::new("Ensalada de patata con huevo y pepino", Lunch, &[LF, GF, VEG, Q], Eggs),
        RecipeSpec::new("Pechuga de pollo con salsa de tomate suave", Dinner, &[LF, GF], Chicken)
            .family("salsa suave sin ajo", "salsa con ajo para familia aparte"),
        RecipeSpec::new("Bowl de arroz con salmón y calabacín", Lunch, &[LF, GF, DF], Fish),
        RecipeSpec::new("Frittata de calabacín y queso sin lactosa", Lunch, &[LF, GF, VEG], Eggs),
        RecipeSpec::new("Quinoa con pollo y zanahoria", Lunch, &[LF, GF], Chicken),
        RecipeSpec::new("Pechuga de pollo con puré de patata", Dinner, &[LF, GF], Chicken),
        RecipeSpec::new("Filete de ternera a la plancha con arroz", Dinner, &[LF, GF], Beef),
        RecipeSpec::new("Tofu crujiente al horno con patata", Dinner, &[LF, GF, VEG], Tofu),
        RecipeSpec::new("Arroz con huevo y pavo", Lunch, &[LF, GF], Eggs),
    ]
}
